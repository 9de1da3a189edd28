#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use census_api::config::ServerConfig;
use census_api::router::build_app_router;
use census_api::state::AppState;
use census_worker::config::SourceConfig;
use census_worker::fetch::StaticFetcher;
use census_worker::harvester::Harvester;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Source URLs pointing at hosts that only exist in a [`StaticFetcher`].
pub fn test_sources() -> SourceConfig {
    SourceConfig {
        random_user_url: "http://randomuser.test/api/".into(),
        random_user_results: 5,
        ui_names_url: "http://uinames.test/api/".into(),
        ui_names_amount: 10,
        json_placeholder_url: "http://placeholder.test/users".into(),
        genderize_url: "http://genderize.test/".into(),
    }
}

/// Build the full application router with the production middleware stack,
/// harvesting from `fetcher` instead of the public APIs.
pub fn build_test_app(pool: PgPool, fetcher: StaticFetcher) -> Router {
    let config = test_config();
    let harvester = Harvester::from_config(&test_sources(), Arc::new(fetcher));

    let state = AppState {
        pool,
        harvester: Arc::new(harvester),
    };

    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
