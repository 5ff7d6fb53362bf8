//! Portfolio CRUD, reference resolution, skills and the detail view over HTTP.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, put_empty, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_portfolio_resolves_references(pool: PgPool) {
    let image = common::create(
        &pool,
        "/api/v1/images",
        json!({ "name": "Headshot", "path": "/img/ada.png" }),
    )
    .await;
    let github = common::create(
        &pool,
        "/api/v1/websites",
        json!({ "name": "GitHub", "url": "https://github.com/ada" }),
    )
    .await;

    let portfolio = common::create(
        &pool,
        "/api/v1/portfolios",
        json!({
            "name": "Ada Lovelace",
            "tagline": "Analyst",
            "email": "ada@example.com",
            "profile_image_id": image["id"],
            "github_website_id": github["id"],
        }),
    )
    .await;

    assert_eq!(portfolio["profile_image"]["path"], "/img/ada.png");
    assert_eq!(portfolio["github_website"]["url"], "https://github.com/ada");
    assert!(portfolio["linkedin_website_id"].is_null());
    assert!(portfolio["linkedin_website"].is_null());

    let id = portfolio["id"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/portfolios/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], portfolio);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_portfolio_update_clears_reference(pool: PgPool) {
    let image = common::create(
        &pool,
        "/api/v1/images",
        json!({ "name": "Headshot", "path": "/img/ada.png" }),
    )
    .await;
    let portfolio = common::create(
        &pool,
        "/api/v1/portfolios",
        json!({ "name": "Ada", "profile_image_id": image["id"] }),
    )
    .await;
    let id = portfolio["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/portfolios/{id}"),
        json!({ "name": "Ada L.", "profile_image_id": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["name"], "Ada L.");
    assert!(data["profile_image_id"].is_null());
    assert!(data["profile_image"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_portfolio_delete_cascades_children(pool: PgPool) {
    let id = common::create_portfolio(&pool, "Ada").await;
    common::create(
        &pool,
        &format!("/api/v1/portfolios/{id}/hobbies"),
        json!({ "description": "Chess" }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/portfolios/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/portfolios/{id}/hobbies")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hobbies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_portfolio_skills_lifecycle(pool: PgPool) {
    let id = common::create_portfolio(&pool, "Ada").await;
    let skills_uri = format!("/api/v1/portfolios/{id}/skills");

    // Create-and-attach twice with the same name reuses the skill.
    let first = common::create(&pool, &skills_uri, json!({ "name": "Rust" })).await;
    let second = common::create(&pool, &skills_uri, json!({ "name": "Rust" })).await;
    assert_eq!(first["id"], second["id"]);

    // Attach an existing skill by id; repeating is harmless.
    let sql = common::create(&pool, "/api/v1/skills", json!({ "name": "SQL" })).await;
    let sql_id = sql["id"].as_i64().unwrap();
    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = put_empty(app, &format!("{skills_uri}/{sql_id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"]["name"], "SQL");
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &skills_uri).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Detach keeps the skill itself.
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("{skills_uri}/{sql_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("{skills_uri}/{sql_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/skills/{sql_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &skills_uri).await).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Rust"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_attach_unknown_skill_or_portfolio_is_404(pool: PgPool) {
    let id = common::create_portfolio(&pool, "Ada").await;

    let app = common::build_test_app(pool.clone());
    let response = put_empty(app, &format!("/api/v1/portfolios/{id}/skills/9999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Skill with id 9999 not found");

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/portfolios/9999/skills",
        json!({ "name": "Rust" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Portfolio with id 9999 not found"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_portfolio_detail(pool: PgPool) {
    let id = common::create_portfolio(&pool, "Ada").await;
    common::create(
        &pool,
        &format!("/api/v1/portfolios/{id}/skills"),
        json!({ "name": "Rust" }),
    )
    .await;
    common::create(
        &pool,
        &format!("/api/v1/portfolios/{id}/hobbies"),
        json!({ "description": "Chess" }),
    )
    .await;
    let project = common::create(
        &pool,
        &format!("/api/v1/portfolios/{id}/side-projects"),
        json!({ "name": "Folio" }),
    )
    .await;
    common::create(
        &pool,
        &format!("/api/v1/side-projects/{}/goals", project["id"]),
        json!({ "description": "Ship v1" }),
    )
    .await;
    let job = common::create(
        &pool,
        &format!("/api/v1/portfolios/{id}/work-experiences"),
        json!({ "company_name": "Acme", "position": "Engineer" }),
    )
    .await;
    common::create(
        &pool,
        &format!("/api/v1/work-experiences/{}/achievements", job["id"]),
        json!({ "description": "Cut p99 latency in half" }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/portfolios/{id}/detail")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let detail = body_json(response).await["data"].clone();
    assert_eq!(detail["id"], id);
    assert_eq!(detail["name"], "Ada");
    assert_eq!(detail["skills"][0]["name"], "Rust");
    assert_eq!(detail["hobbies"][0]["description"], "Chess");
    assert_eq!(detail["side_projects"][0]["name"], "Folio");
    assert_eq!(detail["side_projects"][0]["goals"][0]["description"], "Ship v1");
    assert_eq!(detail["side_projects"][0]["goals"][0]["is_complete"], false);
    assert_eq!(detail["work_experiences"][0]["company_name"], "Acme");
    assert_eq!(
        detail["work_experiences"][0]["achievements"][0]["description"],
        "Cut p99 latency in half"
    );
    assert_eq!(detail["educations"], json!([]));
    assert_eq!(detail["credentials"], json!([]));

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/portfolios/9999/detail").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
