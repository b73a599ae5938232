//! An in-memory catalog of books and authors, served over GraphQL.
//!
//! The [`Store`] holds the data, [`schema`] exposes it through `async-graphql` and
//! [`app_builder`] mounts the schema on an `axum` router. Binding a socket is left to the
//! `catalog-server` binary.

pub mod app_builder;
pub mod config;
pub mod errors;
pub mod lookup;
pub mod model;
pub mod schema;
pub mod seed;
pub mod store;

pub use app_builder::build_app;
pub use errors::CatalogError;
pub use schema::{CatalogSchema, build_schema};
pub use store::Store;

// Only used by the HTTP tests under `tests/`.
#[cfg(test)]
use tower as _;
