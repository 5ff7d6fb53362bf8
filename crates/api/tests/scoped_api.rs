//! Portfolio-scoped collections over HTTP: parent checks, scoping, references.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hobby_lifecycle(pool: PgPool) {
    let portfolio_id = common::create_portfolio(&pool, "Ada").await;
    let board = common::create(
        &pool,
        "/api/v1/images",
        json!({ "name": "Board", "path": "/img/board.png" }),
    )
    .await;
    let hobbies = format!("/api/v1/portfolios/{portfolio_id}/hobbies");

    let chess = common::create(
        &pool,
        &hobbies,
        json!({ "description": "Chess", "image_id": board["id"] }),
    )
    .await;
    let chess_id = chess["id"].as_i64().unwrap();
    assert_eq!(chess["portfolio_id"], portfolio_id);
    assert_eq!(chess["image"]["name"], "Board");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("{hobbies}/{chess_id}"),
        json!({ "description": "Correspondence chess" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["description"], "Correspondence chess");
    assert!(updated["image"].is_null());

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &hobbies).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("{hobbies}/{chess_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &hobbies).await).await;
    assert_eq!(json["data"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_children_are_scoped_to_their_portfolio(pool: PgPool) {
    let ada = common::create_portfolio(&pool, "Ada").await;
    let grace = common::create_portfolio(&pool, "Grace").await;

    let credential = common::create(
        &pool,
        &format!("/api/v1/portfolios/{ada}/credentials"),
        json!({ "name": "CKA", "issuing_body": "CNCF" }),
    )
    .await;
    let id = credential["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/portfolios/{grace}/credentials/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/portfolios/{grace}/credentials/{id}"),
        json!({ "name": "Stolen", "issuing_body": "CNCF" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/portfolios/{grace}/credentials/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/portfolios/{grace}/credentials")).await).await;
    assert_eq!(json["data"], json!([]));

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/portfolios/{ada}/credentials/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "CKA");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_portfolio_is_404(pool: PgPool) {
    for collection in [
        "side-projects",
        "work-experiences",
        "educations",
        "credentials",
        "hobbies",
        "volunteer-works",
        "open-source-contributions",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/portfolios/4040/{collection}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {collection}");
        assert_eq!(
            body_json(response).await["error"],
            "Portfolio with id 4040 not found"
        );
    }

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/portfolios/4040/hobbies",
        json!({ "description": "Chess" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_work_experience_with_company_references(pool: PgPool) {
    let portfolio_id = common::create_portfolio(&pool, "Ada").await;
    let logo = common::create(
        &pool,
        "/api/v1/images",
        json!({ "name": "Acme logo", "path": "/img/acme.svg" }),
    )
    .await;
    let site = common::create(
        &pool,
        "/api/v1/websites",
        json!({ "name": "Acme", "url": "https://acme.test" }),
    )
    .await;

    let job = common::create(
        &pool,
        &format!("/api/v1/portfolios/{portfolio_id}/work-experiences"),
        json!({
            "company_name": "Acme",
            "position": "Engineer",
            "start_date": "2021-03-01",
            "company_logo_id": logo["id"],
            "company_website_id": site["id"],
        }),
    )
    .await;

    assert_eq!(job["start_date"], "2021-03-01");
    assert!(job["end_date"].is_null());
    assert_eq!(job["company_logo"]["path"], "/img/acme.svg");
    assert_eq!(job["company_website"]["url"], "https://acme.test");

    // Deleting the website leaves the job with no website.
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/websites/{}", site["id"])).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/portfolios/{portfolio_id}/work-experiences/{}", job["id"]),
    )
    .await;
    let data = body_json(response).await["data"].clone();
    assert!(data["company_website_id"].is_null());
    assert!(data["company_website"].is_null());
    assert_eq!(data["company_logo"]["name"], "Acme logo");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_education_and_volunteer_work(pool: PgPool) {
    let portfolio_id = common::create_portfolio(&pool, "Ada").await;

    let education = common::create(
        &pool,
        &format!("/api/v1/portfolios/{portfolio_id}/educations"),
        json!({
            "institution_name": "University of London",
            "degree": "BSc",
            "field_of_study": "Mathematics",
            "start_date": "2015-09-01",
            "graduation_date": "2018-06-30",
        }),
    )
    .await;
    assert_eq!(education["degree"], "BSc");

    let volunteer = common::create(
        &pool,
        &format!("/api/v1/portfolios/{portfolio_id}/volunteer-works"),
        json!({ "organization_name": "Code Club", "position": "Mentor" }),
    )
    .await;
    assert_eq!(volunteer["organization_name"], "Code Club");

    let contribution = common::create(
        &pool,
        &format!("/api/v1/portfolios/{portfolio_id}/open-source-contributions"),
        json!({ "project_name": "tokio", "organization_name": "tokio-rs" }),
    )
    .await;
    assert_eq!(contribution["project_name"], "tokio");
}
