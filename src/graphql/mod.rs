// GraphQL surface: schema assembly and the axum routes that expose it.

pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::store::Store;
pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the record store injected as shared state. Every
/// resolver that touches records pulls the store back out of the context.
pub fn build_schema(store: Arc<Store>) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

async fn graphql_handler(State(schema): State<BlogSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Router exposing POST /graphql for queries and mutations, with a GraphiQL
/// page on GET for manual exploration.
pub fn create_graphql_router(schema: BlogSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .with_state(schema)
}
