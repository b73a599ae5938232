//! Construction of the HTTP router serving the schema.

use crate::schema::CatalogSchema;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Router, extract::State, response::Html, routing::get};

/// The path of the GraphQL endpoint. `POST` executes requests, `GET` serves GraphiQL.
pub const ENDPOINT: &str = "/";

/// Builds the router. Requests share the schema, and through it the store.
#[inline]
pub fn build_app(schema: CatalogSchema) -> Router {
    Router::new()
        .route(ENDPOINT, get(graphiql).post(graphql))
        .with_state(schema)
}

/// The handler run for every GraphQL request.
async fn graphql(State(schema): State<CatalogSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Serves the GraphiQL IDE.
#[expect(clippy::unused_async, reason = "Handlers must be async.")]
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}
