#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use folio_api::auth::jwt::{generate_access_token, JwtConfig};
use folio_api::config::{LogFormat, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;

/// Secret shared by the test config and [`bearer`].
pub const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The database URL is unused because the
/// pool comes from `#[sqlx::test]`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            issuer: None,
            audience: None,
        },
    }
}

/// Build the full application router, with the production middleware stack,
/// over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Build the application router over `pool` with a caller-supplied config.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    build_app_router(state)
}

/// A valid `Authorization` header value for the test config.
pub fn bearer() -> String {
    let token = generate_access_token(
        "tester@example.com",
        &test_config().jwt,
        chrono::Duration::minutes(5),
    )
    .expect("token generation should succeed");
    format!("Bearer {token}")
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    auth: Option<String>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

/// Authenticated POST with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), Some(bearer())).await
}

/// POST with a JSON body and no credentials.
pub async fn post_json_anonymous(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), None).await
}

/// POST with a JSON body and an explicit `Authorization` value.
pub async fn post_json_with_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    auth: &str,
) -> Response {
    send(app, Method::POST, uri, Some(body), Some(auth.to_string())).await
}

/// Authenticated POST of a raw body labelled as JSON.
pub async fn post_raw_json(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::post(uri)
        .header(AUTHORIZATION, bearer())
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Authenticated PUT with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body), Some(bearer())).await
}

/// Authenticated PUT without a body.
pub async fn put_empty(app: Router, uri: &str) -> Response {
    send(app, Method::PUT, uri, None, Some(bearer())).await
}

/// Authenticated DELETE.
pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, Some(bearer())).await
}

/// DELETE without credentials.
pub async fn delete_anonymous(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST and return the `data` object of a 201 response.
pub async fn create(pool: &PgPool, uri: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::CREATED,
        "POST {uri} should return 201"
    );
    body_json(response).await["data"].clone()
}

/// Create a portfolio and return its id.
pub async fn create_portfolio(pool: &PgPool, name: &str) -> i64 {
    let data = create(pool, "/api/v1/portfolios", serde_json::json!({ "name": name })).await;
    data["id"].as_i64().unwrap()
}
