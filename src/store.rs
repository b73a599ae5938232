//! The in-memory store holding every book and author.
//!
//! [`Store`] is a cheap handle; clones share the same collections. Each operation holds the lock
//! for its whole duration, so a mutation is never observed half-applied.

use crate::{
    errors::CatalogError,
    lookup::{find, find_author, find_book, position},
    model::{Author, Book, Genre},
    seed,
};
use async_graphql::ID;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// The two ordered collections. Order is insertion order and is what queries return.
#[derive(Debug, Default)]
struct Collections {
    /// All books, including any with duplicate ids.
    books: Vec<Book>,
    /// All authors. Read-only after construction.
    authors: Vec<Author>,
}

/// Shared, mutable storage for the catalog.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// The collections, behind a single lock so operations spanning both stay consistent.
    collections: Arc<RwLock<Collections>>,
}

impl Store {
    /// Creates a store with no books and no authors.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the sample catalog.
    #[inline]
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_data(seed::books(), seed::authors())
    }

    /// Creates a store holding the given records, in the given order.
    #[inline]
    #[must_use]
    pub fn with_data(books: Vec<Book>, authors: Vec<Author>) -> Self {
        Self {
            collections: Arc::new(RwLock::new(Collections { books, authors })),
        }
    }

    /// Returns every book.
    #[inline]
    pub async fn books(&self) -> Vec<Book> {
        let books = self.collections.read().await.books.clone();
        debug!(count = books.len(), "listed books");
        books
    }

    /// Returns every author.
    #[inline]
    pub async fn authors(&self) -> Vec<Author> {
        let authors = self.collections.read().await.authors.clone();
        debug!(count = authors.len(), "listed authors");
        authors
    }

    /// Returns the book with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BookNotFound`] if there is no such book.
    #[inline]
    pub async fn book(&self, id: &str) -> Result<Book, CatalogError> {
        let collections = self.collections.read().await;
        find_book(&collections.books, id)
            .cloned()
            .inspect_err(|err| debug!(%err, "book lookup failed"))
    }

    /// Returns the author with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::AuthorNotFound`] if there is no such author.
    #[inline]
    pub async fn author(&self, id: &str) -> Result<Author, CatalogError> {
        let collections = self.collections.read().await;
        find_author(&collections.authors, id)
            .cloned()
            .inspect_err(|err| debug!(%err, "author lookup failed"))
    }

    /// Returns the books written by the given author, in insertion order. Unknown authors simply
    /// have no books.
    #[inline]
    pub async fn books_by_author(&self, author_id: &str) -> Vec<Book> {
        self.collections
            .read()
            .await
            .books
            .iter()
            .filter(|book| book.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Returns the author with the given id, if any. Books may reference authors that do not
    /// exist, which is not an error.
    #[inline]
    pub async fn author_of(&self, author_id: &str) -> Option<Author> {
        let collections = self.collections.read().await;
        find(&collections.authors, author_id).cloned()
    }

    /// Appends a new book and returns it.
    ///
    /// The id is not checked for uniqueness and `author_id` is not checked against the authors.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidGenre`] if `genre` does not name a [`Genre`]. Nothing is
    /// stored in that case.
    #[inline]
    pub async fn create_book(
        &self,
        id: ID,
        title: String,
        genre: &str,
        author_id: String,
    ) -> Result<Book, CatalogError> {
        let genre = parse_genre(genre)?;
        let book = Book {
            id,
            title,
            author_id,
            genre,
        };

        self.collections.write().await.books.push(book.clone());
        info!(id = book.id.as_str(), title = %book.title, "created book");
        Ok(book)
    }

    /// Overwrites the title and genre of the first book with the given id and returns the result.
    /// The id and author are left as they were.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidGenre`] if `genre` does not name a [`Genre`], or
    /// [`CatalogError::BookNotFound`] if there is no such book. Nothing is changed in either case.
    #[inline]
    pub async fn update_book(
        &self,
        id: &str,
        title: String,
        genre: &str,
    ) -> Result<Book, CatalogError> {
        let genre = parse_genre(genre)?;

        let mut collections = self.collections.write().await;
        let index = book_position(&collections.books, id)?;
        let book = &mut collections.books[index];
        book.title = title;
        book.genre = genre;
        info!(id, title = %book.title, %genre, "updated book");
        Ok(book.clone())
    }

    /// Removes the first book with the given id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BookNotFound`] if there is no such book. Nothing is changed in that
    /// case.
    #[inline]
    pub async fn delete_book(&self, id: &str) -> Result<Book, CatalogError> {
        let mut collections = self.collections.write().await;
        let index = book_position(&collections.books, id)?;
        let book = collections.books.remove(index);
        info!(id, title = %book.title, "deleted book");
        Ok(book)
    }
}

/// Parses a genre argument, logging rejected input.
fn parse_genre(genre: &str) -> Result<Genre, CatalogError> {
    genre
        .parse()
        .inspect_err(|err| warn!(%err, "rejected mutation"))
}

/// Finds the index of a book that is about to be modified, logging misses.
fn book_position(books: &[Book], id: &str) -> Result<usize, CatalogError> {
    position(books, id).ok_or_else(|| {
        let err = CatalogError::BookNotFound { id: id.to_owned() };
        warn!(%err, "rejected mutation");
        err
    })
}
