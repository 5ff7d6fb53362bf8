//! Error envelope and status mapping over HTTP.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_raw_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_not_found_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/images/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Image with id 424242 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_validation_error_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/websites",
        json!({ "name": "GitHub", "url": "github.com/ada" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("url"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_zero_reference_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/portfolios",
        json!({ "name": "Ada", "profile_image_id": 0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("profile_image_id"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_reference_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/portfolios",
        json!({ "name": "Ada", "github_website_id": 999999 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_skill_is_conflict(pool: PgPool) {
    common::create(&pool, "/api/v1/skills", json!({ "name": "Rust" })).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/skills", json!({ "name": "Rust" })).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"].as_str().unwrap().contains("uq_skills_name"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inverted_date_range_is_rejected(pool: PgPool) {
    let portfolio_id = common::create_portfolio(&pool, "Ada").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/portfolios/{portfolio_id}/work-experiences"),
        json!({
            "company_name": "Acme",
            "position": "Engineer",
            "start_date": "2022-06-01",
            "end_date": "2021-01-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "end_date must not be before start_date"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/skills/31337",
        json!({ "name": "Zig" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_body_uses_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw_json(app, "/api/v1/skills", "{\"name\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mistyped_json_field_uses_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/skills", json!({ "name": 5 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_path_id_uses_envelope(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/portfolios/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/portfolios/1/hobbies/xyz").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
