//! The sample data the catalog starts out with.

use crate::model::{Author, Book, Genre};

/// The books present at start-up, in insertion order.
#[inline]
#[must_use]
pub fn books() -> Vec<Book> {
    vec![
        Book::new("1", "The Great Gatsby", "1", Genre::Classic),
        Book::new("2", "To Kill a Mockingbird", "2", Genre::Classic),
        Book::new("3", "The Catcher in the Rye", "3", Genre::Classic),
        Book::new(
            "4",
            "Harry Potter and the Philosopher's Stone",
            "4",
            Genre::Fantasy,
        ),
        Book::new("5", "Tender Is the Night", "1", Genre::Classic),
        Book::new(
            "6",
            "Harry Potter and the Chamber of Secrets",
            "4",
            Genre::Fantasy,
        ),
    ]
}

/// The authors present at start-up, in insertion order.
#[inline]
#[must_use]
pub fn authors() -> Vec<Author> {
    vec![
        Author::new("1", "F. Scott Fitzgerald"),
        Author::new("2", "Harper Lee"),
        Author::new("3", "J.D. Salinger"),
        Author::new("4", "J.K. Rowling"),
    ]
}
