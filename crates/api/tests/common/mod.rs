#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use hourlypitch_api::auth::basic::{encode_basic_auth, AdminCredentials, ADMIN_USERNAME};
use hourlypitch_api::config::ServerConfig;
use hourlypitch_api::rotation::CurrentIdea;
use hourlypitch_api::router::build_app_router;
use hourlypitch_api::state::AppState;
use hourlypitch_api::views::Templates;
use hourlypitch_core::idea::SeedStrategy;
use hourlypitch_db::models::idea::Idea;

pub const TEST_PASSWORD: &str = "test-admin-password";

/// Build a test `ServerConfig` pointing at the repository's templates.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        template_dir: template_dir(),
        request_timeout_secs: 30,
        seed_strategy: SeedStrategy::Legacy,
        admin: AdminCredentials::new(TEST_PASSWORD),
    }
}

pub fn template_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

/// Build application state around `pool` with the given current idea.
pub fn build_test_state(pool: SqlitePool, current: Option<Idea>) -> AppState {
    let config = test_config();
    let templates = Templates::load(&config.template_dir).expect("templates should load");

    AppState {
        pool,
        config: Arc::new(config),
        templates: Arc::new(templates),
        current: Arc::new(CurrentIdea::new(current)),
    }
}

/// Build the full application router, with the same middleware stack as
/// production, and no current idea.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_router(build_test_state(pool, None))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub fn admin_auth() -> String {
    encode_basic_auth(ADMIN_USERNAME, TEST_PASSWORD)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_with_auth(app: Router, uri: &str, authorization: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_admin(app: Router, uri: &str) -> Response {
    get_with_auth(app, uri, &admin_auth()).await
}

pub async fn post_form(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    authorization: Option<&str>,
) -> Response {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(auth) = authorization {
        builder = builder.header(AUTHORIZATION, auth);
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}

pub async fn post_admin(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    post_form(app, uri, fields, Some(&admin_auth())).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Store helpers
// ---------------------------------------------------------------------------

pub async fn count_ideas(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM ideas")
        .fetch_one(pool)
        .await
        .unwrap()
}
