//! Handlers for `/portfolios/{portfolio_id}/work-experiences`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::work_experience::{WorkExperience, WorkExperienceInput};
use folio_db::repositories::WorkExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_portfolio_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "WorkExperience",
        id,
    })
}

/// POST /api/v1/portfolios/{portfolio_id}/work-experiences
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
    AppJson(input): AppJson<WorkExperienceInput>,
) -> AppResult<(StatusCode, Json<DataResponse<WorkExperience>>)> {
    input.validate()?;
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let work_experience = WorkExperienceRepo::create(&state.pool, portfolio_id, &input).await?;

    tracing::info!(
        work_experience_id = work_experience.id,
        portfolio_id,
        subject = %auth.subject,
        "WorkExperience created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: work_experience })))
}

/// GET /api/v1/portfolios/{portfolio_id}/work-experiences
pub async fn list_by_portfolio(
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<WorkExperience>>>> {
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let work_experiences = WorkExperienceRepo::list_by_portfolio(&state.pool, portfolio_id).await?;
    Ok(Json(DataResponse { data: work_experiences }))
}

/// GET /api/v1/portfolios/{portfolio_id}/work-experiences/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<WorkExperience>>> {
    let work_experience = WorkExperienceRepo::find_in_portfolio(&state.pool, portfolio_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: work_experience }))
}

/// PUT /api/v1/portfolios/{portfolio_id}/work-experiences/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<WorkExperienceInput>,
) -> AppResult<Json<DataResponse<WorkExperience>>> {
    input.validate()?;
    let work_experience = WorkExperienceRepo::update(&state.pool, portfolio_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        work_experience_id = id,
        portfolio_id,
        subject = %auth.subject,
        "WorkExperience updated"
    );

    Ok(Json(DataResponse { data: work_experience }))
}

/// DELETE /api/v1/portfolios/{portfolio_id}/work-experiences/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if WorkExperienceRepo::delete(&state.pool, portfolio_id, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(
        work_experience_id = id,
        portfolio_id,
        subject = %auth.subject,
        "WorkExperience deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
