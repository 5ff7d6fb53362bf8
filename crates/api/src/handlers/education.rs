//! Handlers for `/portfolios/{portfolio_id}/educations`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::education::{Education, EducationInput};
use folio_db::repositories::EducationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_portfolio_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Education",
        id,
    })
}

/// POST /api/v1/portfolios/{portfolio_id}/educations
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
    AppJson(input): AppJson<EducationInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Education>>)> {
    input.validate()?;
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let education = EducationRepo::create(&state.pool, portfolio_id, &input).await?;

    tracing::info!(
        education_id = education.id,
        portfolio_id,
        subject = %auth.subject,
        "Education created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: education })))
}

/// GET /api/v1/portfolios/{portfolio_id}/educations
pub async fn list_by_portfolio(
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<Education>>>> {
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let educations = EducationRepo::list_by_portfolio(&state.pool, portfolio_id).await?;
    Ok(Json(DataResponse { data: educations }))
}

/// GET /api/v1/portfolios/{portfolio_id}/educations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Education>>> {
    let education = EducationRepo::find_in_portfolio(&state.pool, portfolio_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: education }))
}

/// PUT /api/v1/portfolios/{portfolio_id}/educations/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<EducationInput>,
) -> AppResult<Json<DataResponse<Education>>> {
    input.validate()?;
    let education = EducationRepo::update(&state.pool, portfolio_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(education_id = id, portfolio_id, subject = %auth.subject, "Education updated");

    Ok(Json(DataResponse { data: education }))
}

/// DELETE /api/v1/portfolios/{portfolio_id}/educations/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if EducationRepo::delete(&state.pool, portfolio_id, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(education_id = id, portfolio_id, subject = %auth.subject, "Education deleted");

    Ok(StatusCode::NO_CONTENT)
}
