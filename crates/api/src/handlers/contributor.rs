//! Handlers for `/side-projects/{side_project_id}/contributors`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::contributor::{Contributor, ContributorInput};
use folio_db::repositories::ContributorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_side_project_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Contributor",
        id,
    })
}

/// POST /api/v1/side-projects/{side_project_id}/contributors
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(side_project_id): AppPath<DbId>,
    AppJson(input): AppJson<ContributorInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Contributor>>)> {
    input.validate()?;
    ensure_side_project_exists(&state.pool, side_project_id).await?;
    let contributor = ContributorRepo::create(&state.pool, side_project_id, &input).await?;

    tracing::info!(
        contributor_id = contributor.id,
        side_project_id,
        subject = %auth.subject,
        "Contributor created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: contributor })))
}

/// GET /api/v1/side-projects/{side_project_id}/contributors
pub async fn list_by_side_project(
    State(state): State<AppState>,
    AppPath(side_project_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<Contributor>>>> {
    ensure_side_project_exists(&state.pool, side_project_id).await?;
    let contributors = ContributorRepo::list_by_side_project(&state.pool, side_project_id).await?;
    Ok(Json(DataResponse { data: contributors }))
}

/// GET /api/v1/side-projects/{side_project_id}/contributors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Contributor>>> {
    let contributor = ContributorRepo::find_in_side_project(&state.pool, side_project_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: contributor }))
}

/// PUT /api/v1/side-projects/{side_project_id}/contributors/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<ContributorInput>,
) -> AppResult<Json<DataResponse<Contributor>>> {
    input.validate()?;
    let contributor = ContributorRepo::update(&state.pool, side_project_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        contributor_id = id,
        side_project_id,
        subject = %auth.subject,
        "Contributor updated"
    );

    Ok(Json(DataResponse { data: contributor }))
}

/// DELETE /api/v1/side-projects/{side_project_id}/contributors/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if ContributorRepo::delete(&state.pool, side_project_id, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(
        contributor_id = id,
        side_project_id,
        subject = %auth.subject,
        "Contributor deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
