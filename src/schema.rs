//! The GraphQL schema: query and mutation roots plus the derived fields of [`Author`] and
//! [`Book`].
//!
//! Every resolver delegates to the [`Store`]. Failures come back as [`CatalogError`] and are
//! turned into GraphQL errors here, so the nullable field resolves to `null` and the error is
//! listed in the response.

use crate::{
    errors::CatalogError,
    model::{Author, Book},
    store::Store,
};
use async_graphql::{
    ComplexObject, Context, EmptySubscription, Error as GraphQlError, ErrorExtensions, ID, Object,
    Result, Schema,
};

/// The schema served by the catalog.
pub type CatalogSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builds the schema around a store. The store is shared by the roots and by the nested field
/// resolvers, which reach it through the request context.
#[inline]
#[must_use]
pub fn build_schema(store: Store) -> CatalogSchema {
    let query = Query {
        store: store.clone(),
    };
    let mutation = Mutation {
        store: store.clone(),
    };
    Schema::build(query, mutation, EmptySubscription)
        .data(store)
        .finish()
}

/// Converts a store failure into a GraphQL error with a `code` extension.
fn to_graphql(err: CatalogError) -> GraphQlError {
    err.extend()
}

/// Read-only operations.
#[derive(Debug)]
pub struct Query {
    /// The store to read from.
    store: Store,
}

#[Object]
impl Query {
    /// All books, in insertion order.
    // `[Book]`: both the list and its items are nullable.
    async fn books(&self) -> Option<Vec<Option<Book>>> {
        Some(self.store.books().await.into_iter().map(Some).collect())
    }

    /// All authors, in insertion order.
    async fn authors(&self) -> Option<Vec<Option<Author>>> {
        Some(self.store.authors().await.into_iter().map(Some).collect())
    }

    /// The book with the given id.
    async fn book(&self, id: ID) -> Result<Option<Book>> {
        self.store.book(&id).await.map(Some).map_err(to_graphql)
    }

    /// The author with the given id.
    async fn author(&self, id: ID) -> Result<Option<Author>> {
        self.store.author(&id).await.map(Some).map_err(to_graphql)
    }
}

/// Operations modifying the book collection. Authors cannot be modified.
#[derive(Debug)]
pub struct Mutation {
    /// The store to modify.
    store: Store,
}

#[Object]
impl Mutation {
    /// Appends a book. Ids are not checked for uniqueness. A missing `authorId` is stored as an
    /// empty string, which matches no author.
    async fn create_book(
        &self,
        id: ID,
        title: String,
        genre: String,
        author_id: Option<String>,
    ) -> Result<Option<Book>> {
        self.store
            .create_book(id, title, &genre, author_id.unwrap_or_default())
            .await
            .map(Some)
            .map_err(to_graphql)
    }

    /// Overwrites the title and genre of a book.
    async fn update_book(&self, id: ID, title: String, genre: String) -> Result<Option<Book>> {
        self.store
            .update_book(&id, title, &genre)
            .await
            .map(Some)
            .map_err(to_graphql)
    }

    /// Removes a book, returning it as it was.
    async fn delete_book(&self, id: ID) -> Result<Option<Book>> {
        self.store
            .delete_book(&id)
            .await
            .map(Some)
            .map_err(to_graphql)
    }
}

#[ComplexObject]
impl Author {
    /// The books whose `authorId` is this author's id, in insertion order.
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        Ok(ctx.data::<Store>()?.books_by_author(&self.id).await)
    }
}

#[ComplexObject]
impl Book {
    /// The author referenced by `authorId`, or `null` if there is none.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        Ok(ctx.data::<Store>()?.author_of(&self.author_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Genre;
    use async_graphql::{Request, Response, Value, Variables};
    use serde_json::{Value as Json, json};

    async fn run(schema: &CatalogSchema, query: &str) -> Response {
        schema.execute(query).await
    }

    /// The response data as JSON, so enum values compare equal to plain strings.
    fn data(response: &Response) -> Json {
        response
            .data
            .clone()
            .into_json()
            .expect("Response data should be valid JSON")
    }

    fn error_code(response: &Response) -> Option<Value> {
        response
            .errors
            .first()?
            .extensions
            .as_ref()?
            .get("code")
            .cloned()
    }

    #[tokio::test]
    async fn author_resolves_their_books() {
        let schema = build_schema(Store::seeded());
        let response = run(&schema, r#"{ author(id: "1") { name books { title } } }"#).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            data(&response),
            json!({
                "author": {
                    "name": "F. Scott Fitzgerald",
                    "books": [
                        { "title": "The Great Gatsby" },
                        { "title": "Tender Is the Night" }
                    ]
                }
            })
        );
    }

    #[tokio::test]
    async fn rowling_has_both_harry_potter_books() {
        let schema = build_schema(Store::seeded());
        let response = run(&schema, r#"{ author(id: "4") { books { id genre } } }"#).await;
        assert_eq!(
            data(&response),
            json!({
                "author": {
                    "books": [
                        { "id": "4", "genre": "Fantasy" },
                        { "id": "6", "genre": "Fantasy" }
                    ]
                }
            })
        );
    }

    #[tokio::test]
    async fn book_resolves_its_author() {
        let schema = build_schema(Store::seeded());
        let response = run(
            &schema,
            r#"{ book(id: "1") { title authorId genre author { id name } } }"#
        )
        .await;
        assert_eq!(
            data(&response),
            json!({
                "book": {
                    "title": "The Great Gatsby",
                    "authorId": "1",
                    "genre": "Classic",
                    "author": { "id": "1", "name": "F. Scott Fitzgerald" }
                }
            })
        );
    }

    #[tokio::test]
    async fn dangling_author_is_null_without_error() {
        let store = Store::with_data(
            vec![Book::new("1", "Orphan", "99", Genre::Fiction)],
            Vec::new()
        );
        let schema = build_schema(store);
        let response = run(&schema, "{ books { author { name } } }").await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(data(&response), json!({ "books": [{ "author": null }] }));
    }

    #[tokio::test]
    async fn missing_book_is_an_error() {
        let schema = build_schema(Store::seeded());
        let response = run(&schema, r#"{ book(id: "99") { title } }"#).await;
        assert_eq!(data(&response), json!({ "book": null }));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "Book not found: 99");
        assert_eq!(error_code(&response), Some(Value::from("NOT_FOUND")));

        let response = run(&schema, r#"{ author(id: "99") { name } }"#).await;
        assert_eq!(data(&response), json!({ "author": null }));
        assert_eq!(response.errors[0].message, "Author not found: 99");
    }

    #[tokio::test]
    async fn lists_cover_the_whole_catalog() {
        let schema = build_schema(Store::seeded());
        let response = run(&schema, "{ books { id } authors { id } }").await;
        assert_eq!(
            data(&response),
            json!({
                "books": [
                    { "id": "1" }, { "id": "2" }, { "id": "3" },
                    { "id": "4" }, { "id": "5" }, { "id": "6" }
                ],
                "authors": [{ "id": "1" }, { "id": "2" }, { "id": "3" }, { "id": "4" }]
            })
        );
    }

    #[tokio::test]
    async fn create_without_author_id_stores_empty_reference() {
        let schema = build_schema(Store::seeded());
        let response = run(
            &schema,
            r#"mutation { createBook(id: "7", title: "Gone Girl", genre: "Mystery") { id authorId } }"#
        )
        .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            data(&response),
            json!({ "createBook": { "id": "7", "authorId": "" } })
        );

        let response = run(&schema, r#"{ book(id: "7") { title genre author { name } } }"#).await;
        assert_eq!(
            data(&response),
            json!({ "book": { "title": "Gone Girl", "genre": "Mystery", "author": null } })
        );
    }

    #[tokio::test]
    async fn create_with_author_id_links_the_author() {
        let schema = build_schema(Store::seeded());
        let request = Request::new(
            "mutation Create($id: ID!, $title: String!, $genre: String!, $authorId: String) {
                createBook(id: $id, title: $title, genre: $genre, authorId: $authorId) {
                    author { name }
                }
            }"
        )
        .variables(Variables::from_json(json!({
            "id": "7",
            "title": "Harry Potter and the Prisoner of Azkaban",
            "genre": "Fantasy",
            "authorId": "4"
        })));
        let response = schema.execute(request).await;
        assert_eq!(
            data(&response),
            json!({ "createBook": { "author": { "name": "J.K. Rowling" } } })
        );

        let response = run(&schema, r#"{ author(id: "4") { books { id } } }"#).await;
        assert_eq!(
            data(&response),
            json!({ "author": { "books": [{ "id": "4" }, { "id": "6" }, { "id": "7" }] } })
        );
    }

    #[tokio::test]
    async fn update_changes_title_and_genre() {
        let schema = build_schema(Store::seeded());
        let response = run(
            &schema,
            r#"mutation { updateBook(id: "2", title: "Go Set a Watchman", genre: "Fiction") {
                id title authorId genre
            } }"#
        )
        .await;
        assert_eq!(
            data(&response),
            json!({
                "updateBook": {
                    "id": "2",
                    "title": "Go Set a Watchman",
                    "authorId": "2",
                    "genre": "Fiction"
                }
            })
        );
    }

    #[tokio::test]
    async fn invalid_genre_is_rejected() {
        let schema = build_schema(Store::seeded());
        let response = run(
            &schema,
            r#"mutation { updateBook(id: "2", title: "X", genre: "Horror") { id } }"#
        )
        .await;
        assert_eq!(data(&response), json!({ "updateBook": null }));
        assert_eq!(response.errors[0].message, "Invalid genre: Horror");
        assert_eq!(error_code(&response), Some(Value::from("BAD_USER_INPUT")));

        let response = run(&schema, r#"{ book(id: "2") { title } }"#).await;
        assert_eq!(
            data(&response),
            json!({ "book": { "title": "To Kill a Mockingbird" } })
        );
    }

    #[tokio::test]
    async fn delete_returns_removed_book_then_fails() {
        let schema = build_schema(Store::seeded());
        let delete = r#"mutation { deleteBook(id: "5") { title } }"#;

        let response = run(&schema, delete).await;
        assert_eq!(
            data(&response),
            json!({ "deleteBook": { "title": "Tender Is the Night" } })
        );

        let response = run(&schema, delete).await;
        assert_eq!(data(&response), json!({ "deleteBook": null }));
        assert_eq!(response.errors[0].message, "Book not found: 5");

        let response = run(&schema, r#"{ author(id: "1") { books { title } } }"#).await;
        assert_eq!(
            data(&response),
            json!({ "author": { "books": [{ "title": "The Great Gatsby" }] } })
        );
    }

    #[tokio::test]
    async fn genre_values_keep_their_names() {
        let schema = build_schema(Store::new());
        let response = run(&schema, r#"{ __type(name: "Genre") { enumValues { name } } }"#).await;
        assert_eq!(
            data(&response),
            json!({
                "__type": {
                    "enumValues": [
                        { "name": "Mystery" },
                        { "name": "Fantasy" },
                        { "name": "Classic" },
                        { "name": "Fiction" }
                    ]
                }
            })
        );
    }

    #[test]
    fn sdl_declares_the_catalog_fields() {
        let sdl = build_schema(Store::new()).sdl();
        for declaration in [
            "enum Genre",
            "type Author",
            "type Book",
            "type Query",
            "type Mutation",
            "authorId: String!",
            "genre: Genre!",
            "author: Author",
            "books: [Book!]!",
            "books: [Book]",
            "authors: [Author]",
            "book(id: ID!): Book",
            "author(id: ID!): Author",
            "createBook(id: ID!, title: String!, genre: String!, authorId: String): Book",
            "updateBook(id: ID!, title: String!, genre: String!): Book",
            "deleteBook(id: ID!): Book"
        ] {
            assert!(sdl.contains(declaration), "missing {declaration:?} in:\n{sdl}");
        }
    }
}
