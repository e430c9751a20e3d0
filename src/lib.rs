pub mod api;
pub mod config;
pub mod error;
pub mod graphql;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

pub use error::{MappingError, ServiceError, ServiceResult};
pub use graphql::{build_schema, AppSchema, AppServices};
pub use model::*;
pub use store::Repositories;

/// Router serving the GraphQL schema over the given repositories.
pub fn build_app(repositories: &Repositories, config: &config::AppConfig) -> axum::Router {
    let services = AppServices::new(repositories, &config.songs.path_prefix);
    routes::create_router().with_state(build_schema(services))
}

/// Bind the configured address and serve `app` until shutdown.
pub async fn run_server(app: axum::Router, config: &config::AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    println!("Sun server running on http://{}", bind_address);
    println!("GraphiQL available at http://{}/graphql", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn build_app_applies_configured_stem_prefix() {
        let repositories = Repositories::memory();
        seed::load_seed_data(&repositories).await.unwrap();
        let mut config = crate::config::AppConfig::default();
        config.songs.path_prefix = "/media/".to_string();

        let request = Request::post("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"query":"{ stemPlayerQueries { list { path stems { path } } } }"}"#,
            ))
            .unwrap();
        let response = build_app(&repositories, &config)
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let song = &json["data"]["stemPlayerQueries"]["list"][0];
        assert_eq!(song["path"], "/media/fell-in-again/mix.mp3");
        assert_eq!(
            song["stems"][0]["path"],
            "/media/fell-in-again/stems/ambience.mp3"
        );
    }
}
