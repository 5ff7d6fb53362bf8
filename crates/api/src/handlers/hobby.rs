//! Handlers for `/portfolios/{portfolio_id}/hobbies`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::hobby::{Hobby, HobbyInput};
use folio_db::repositories::HobbyRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_portfolio_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Hobby",
        id,
    })
}

/// POST /api/v1/portfolios/{portfolio_id}/hobbies
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
    AppJson(input): AppJson<HobbyInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Hobby>>)> {
    input.validate()?;
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let hobby = HobbyRepo::create(&state.pool, portfolio_id, &input).await?;

    tracing::info!(
        hobby_id = hobby.id,
        portfolio_id,
        subject = %auth.subject,
        "Hobby created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: hobby })))
}

/// GET /api/v1/portfolios/{portfolio_id}/hobbies
pub async fn list_by_portfolio(
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<Hobby>>>> {
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let hobbies = HobbyRepo::list_by_portfolio(&state.pool, portfolio_id).await?;
    Ok(Json(DataResponse { data: hobbies }))
}

/// GET /api/v1/portfolios/{portfolio_id}/hobbies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Hobby>>> {
    let hobby = HobbyRepo::find_in_portfolio(&state.pool, portfolio_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: hobby }))
}

/// PUT /api/v1/portfolios/{portfolio_id}/hobbies/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<HobbyInput>,
) -> AppResult<Json<DataResponse<Hobby>>> {
    input.validate()?;
    let hobby = HobbyRepo::update(&state.pool, portfolio_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(hobby_id = id, portfolio_id, subject = %auth.subject, "Hobby updated");

    Ok(Json(DataResponse { data: hobby }))
}

/// DELETE /api/v1/portfolios/{portfolio_id}/hobbies/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if HobbyRepo::delete(&state.pool, portfolio_id, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(hobby_id = id, portfolio_id, subject = %auth.subject, "Hobby deleted");

    Ok(StatusCode::NO_CONTENT)
}
