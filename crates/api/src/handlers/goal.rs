//! Handlers for `/side-projects/{side_project_id}/goals`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::goal::{Goal, GoalInput};
use folio_db::repositories::GoalRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_side_project_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Goal",
        id,
    })
}

/// POST /api/v1/side-projects/{side_project_id}/goals
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(side_project_id): AppPath<DbId>,
    AppJson(input): AppJson<GoalInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Goal>>)> {
    input.validate()?;
    ensure_side_project_exists(&state.pool, side_project_id).await?;
    let goal = GoalRepo::create(&state.pool, side_project_id, &input).await?;

    tracing::info!(
        goal_id = goal.id,
        side_project_id,
        subject = %auth.subject,
        "Goal created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: goal })))
}

/// GET /api/v1/side-projects/{side_project_id}/goals
pub async fn list_by_side_project(
    State(state): State<AppState>,
    AppPath(side_project_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<Goal>>>> {
    ensure_side_project_exists(&state.pool, side_project_id).await?;
    let goals = GoalRepo::list_by_side_project(&state.pool, side_project_id).await?;
    Ok(Json(DataResponse { data: goals }))
}

/// GET /api/v1/side-projects/{side_project_id}/goals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Goal>>> {
    let goal = GoalRepo::find_in_side_project(&state.pool, side_project_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: goal }))
}

/// PUT /api/v1/side-projects/{side_project_id}/goals/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<GoalInput>,
) -> AppResult<Json<DataResponse<Goal>>> {
    input.validate()?;
    let goal = GoalRepo::update(&state.pool, side_project_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(goal_id = id, side_project_id, subject = %auth.subject, "Goal updated");

    Ok(Json(DataResponse { data: goal }))
}

/// DELETE /api/v1/side-projects/{side_project_id}/goals/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if GoalRepo::delete(&state.pool, side_project_id, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(goal_id = id, side_project_id, subject = %auth.subject, "Goal deleted");

    Ok(StatusCode::NO_CONTENT)
}
