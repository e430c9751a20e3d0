use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::graphql::AppSchema;

pub fn create_router() -> Router<AppSchema> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // GraphQL endpoint and its development page
        .route(
            "/graphql",
            get(handlers::graphiql).post(handlers::graphql_handler),
        )
        .layer(CorsLayer::permissive())
}
