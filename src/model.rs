//! The records held by the catalog and exposed through the GraphQL schema.
//!
//! Field resolvers that need the store (`Author.books`, `Book.author`) live in
//! [`schema`](crate::schema); everything here is plain data.

use crate::errors::CatalogError;
use async_graphql::{Enum, ID, SimpleObject};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// A book in the catalog.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Book {
    /// Identifier of the book. Not enforced to be unique on creation.
    pub id: ID,
    /// The title of the book.
    pub title: String,
    /// Identifier of the author. May point at an author that does not exist.
    pub author_id: String,
    /// The genre of the book.
    pub genre: Genre,
}

impl Book {
    /// Creates a book record.
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author_id: impl Into<String>,
        genre: Genre,
    ) -> Self {
        Self {
            id: ID(id.into()),
            title: title.into(),
            author_id: author_id.into(),
            genre,
        }
    }
}

/// An author in the catalog. Their books are derived at read time by matching
/// [`Book::author_id`], nothing is stored on the author itself.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Author {
    /// Identifier of the author.
    pub id: ID,
    /// The name of the author.
    pub name: String,
}

impl Author {
    /// Creates an author record.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ID(id.into()),
            name: name.into(),
        }
    }
}

/// The genre of a book.
// Variant names double as the wire representation, hence `PascalCase` rather than the default
// `SCREAMING_SNAKE_CASE`.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
#[graphql(rename_items = "PascalCase")]
pub enum Genre {
    /// Mystery.
    Mystery,
    /// Fantasy.
    Fantasy,
    /// Classic.
    Classic,
    /// Fiction.
    Fiction,
}

impl Genre {
    /// The name of the genre, as used in the schema and accepted by [`FromStr`].
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mystery => "Mystery",
            Self::Fantasy => "Fantasy",
            Self::Classic => "Classic",
            Self::Fiction => "Fiction",
        }
    }
}

impl Display for Genre {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Mutations receive the genre as a plain string, so it has to be checked by hand. Matching is
/// case-sensitive.
impl FromStr for Genre {
    type Err = CatalogError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mystery" => Ok(Self::Mystery),
            "Fantasy" => Ok(Self::Fantasy),
            "Classic" => Ok(Self::Classic),
            "Fiction" => Ok(Self::Fiction),
            _ => Err(CatalogError::InvalidGenre {
                value: s.to_owned(),
            }),
        }
    }
}
