//! Error types used by the catalog.

use async_graphql::{Error as GraphQlError, ErrorExtensions};
use thiserror::Error;

/// Errors that may occur when reading or modifying the catalog.
///
/// Every failure leaves the store untouched. The GraphQL layer converts these into error entries
/// through [`ErrorExtensions`], tagging each with a machine-readable `code` extension.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// No book has the requested id.
    #[error("Book not found: {id}")]
    BookNotFound {
        /// The id that was looked up.
        id: String,
    },
    /// No author has the requested id.
    #[error("Author not found: {id}")]
    AuthorNotFound {
        /// The id that was looked up.
        id: String,
    },
    /// A genre string did not name any [`Genre`](crate::model::Genre) variant.
    #[error("Invalid genre: {value}")]
    InvalidGenre {
        /// The rejected input, verbatim.
        value: String,
    },
}

impl CatalogError {
    /// The `code` extension attached to the GraphQL error.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BookNotFound { .. } | Self::AuthorNotFound { .. } => "NOT_FOUND",
            Self::InvalidGenre { .. } => "BAD_USER_INPUT",
        }
    }
}

impl ErrorExtensions for CatalogError {
    #[inline]
    fn extend(&self) -> GraphQlError {
        GraphQlError::new(self.to_string()).extend_with(|_, extensions| {
            extensions.set("code", self.code());
        })
    }
}
