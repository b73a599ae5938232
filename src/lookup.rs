//! Lookup of records by id.
//!
//! All lookups are linear scans returning the first match. This is fine for a catalog of this
//! size; swapping in an index only requires changing the functions here, not their callers.

use crate::{
    errors::CatalogError,
    model::{Author, Book},
};

/// A record that can be looked up by a string id.
pub trait Keyed {
    /// The id of the record.
    fn id(&self) -> &str;
}

impl Keyed for Book {
    #[inline]
    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for Author {
    #[inline]
    fn id(&self) -> &str {
        &self.id
    }
}

/// Returns the first record with the given id.
#[inline]
#[must_use]
pub fn find<'a, T: Keyed>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.id() == id)
}

/// Returns the index of the first record with the given id.
#[inline]
#[must_use]
pub fn position<T: Keyed>(records: &[T], id: &str) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}

/// Returns the first book with the given id.
///
/// # Errors
///
/// Returns [`CatalogError::BookNotFound`] if there is no such book.
#[inline]
pub fn find_book<'a>(books: &'a [Book], id: &str) -> Result<&'a Book, CatalogError> {
    find(books, id).ok_or_else(|| CatalogError::BookNotFound { id: id.to_owned() })
}

/// Returns the first author with the given id.
///
/// # Errors
///
/// Returns [`CatalogError::AuthorNotFound`] if there is no such author.
#[inline]
pub fn find_author<'a>(authors: &'a [Author], id: &str) -> Result<&'a Author, CatalogError> {
    find(authors, id).ok_or_else(|| CatalogError::AuthorNotFound { id: id.to_owned() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Genre;

    fn books() -> Vec<Book> {
        vec![
            Book::new("1", "First", "1", Genre::Fiction),
            Book::new("2", "Second", "1", Genre::Mystery),
            // Duplicate ids are possible through `createBook`.
            Book::new("1", "Shadowed", "2", Genre::Fantasy),
        ]
    }

    #[test]
    fn find_returns_first_match() {
        let books = books();
        let found = find_book(&books, "1").expect("book 1 is present");
        assert_eq!(found.title, "First");
        assert_eq!(position(&books, "2"), Some(1));
    }

    #[test]
    fn missing_ids_are_not_found() {
        let books = books();
        assert_eq!(
            find_book(&books, "3"),
            Err(CatalogError::BookNotFound { id: "3".to_owned() })
        );
        assert_eq!(position(&books, "3"), None);

        let authors = vec![Author::new("1", "Someone")];
        assert_eq!(
            find_author(&authors, "2"),
            Err(CatalogError::AuthorNotFound { id: "2".to_owned() })
        );
        assert_eq!(
            find_author(&authors, "1").map(|author| author.name.as_str()),
            Ok("Someone")
        );
    }

    #[test]
    fn empty_collections_find_nothing() {
        let books: Vec<Book> = Vec::new();
        assert!(find(&books, "1").is_none());
    }
}
