//! Handlers for `/portfolios/{portfolio_id}/side-projects`.
//!
//! Goals, contributors, API services, dependency libraries and skills of a
//! side project live under `/side-projects/{side_project_id}` and have their
//! own modules.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::side_project::{SideProject, SideProjectInput};
use folio_db::repositories::SideProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_portfolio_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SideProject",
        id,
    })
}

/// POST /api/v1/portfolios/{portfolio_id}/side-projects
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
    AppJson(input): AppJson<SideProjectInput>,
) -> AppResult<(StatusCode, Json<DataResponse<SideProject>>)> {
    input.validate()?;
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let side_project = SideProjectRepo::create(&state.pool, portfolio_id, &input).await?;

    tracing::info!(
        side_project_id = side_project.id,
        portfolio_id,
        subject = %auth.subject,
        "SideProject created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: side_project })))
}

/// GET /api/v1/portfolios/{portfolio_id}/side-projects
pub async fn list_by_portfolio(
    State(state): State<AppState>,
    AppPath(portfolio_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<SideProject>>>> {
    ensure_portfolio_exists(&state.pool, portfolio_id).await?;
    let side_projects = SideProjectRepo::list_by_portfolio(&state.pool, portfolio_id).await?;
    Ok(Json(DataResponse { data: side_projects }))
}

/// GET /api/v1/portfolios/{portfolio_id}/side-projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<SideProject>>> {
    let side_project = SideProjectRepo::find_in_portfolio(&state.pool, portfolio_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: side_project }))
}

/// PUT /api/v1/portfolios/{portfolio_id}/side-projects/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<SideProjectInput>,
) -> AppResult<Json<DataResponse<SideProject>>> {
    input.validate()?;
    let side_project = SideProjectRepo::update(&state.pool, portfolio_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        side_project_id = id,
        portfolio_id,
        subject = %auth.subject,
        "SideProject updated"
    );

    Ok(Json(DataResponse { data: side_project }))
}

/// DELETE /api/v1/portfolios/{portfolio_id}/side-projects/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((portfolio_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if SideProjectRepo::delete(&state.pool, portfolio_id, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(
        side_project_id = id,
        portfolio_id,
        subject = %auth.subject,
        "SideProject deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
