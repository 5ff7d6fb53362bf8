//! Handlers for `/side-projects/{side_project_id}/dependency-libraries`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::dependency_library::{DependencyLibrary, DependencyLibraryInput};
use folio_db::repositories::DependencyLibraryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_side_project_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "DependencyLibrary",
        id,
    })
}

/// POST /api/v1/side-projects/{side_project_id}/dependency-libraries
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(side_project_id): AppPath<DbId>,
    AppJson(input): AppJson<DependencyLibraryInput>,
) -> AppResult<(StatusCode, Json<DataResponse<DependencyLibrary>>)> {
    input.validate()?;
    ensure_side_project_exists(&state.pool, side_project_id).await?;
    let library = DependencyLibraryRepo::create(&state.pool, side_project_id, &input).await?;

    tracing::info!(
        dependency_library_id = library.id,
        side_project_id,
        subject = %auth.subject,
        "DependencyLibrary created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: library })))
}

/// GET /api/v1/side-projects/{side_project_id}/dependency-libraries
pub async fn list_by_side_project(
    State(state): State<AppState>,
    AppPath(side_project_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<DependencyLibrary>>>> {
    ensure_side_project_exists(&state.pool, side_project_id).await?;
    let libraries =
        DependencyLibraryRepo::list_by_side_project(&state.pool, side_project_id).await?;
    Ok(Json(DataResponse { data: libraries }))
}

/// GET /api/v1/side-projects/{side_project_id}/dependency-libraries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<DependencyLibrary>>> {
    let library = DependencyLibraryRepo::find_in_side_project(&state.pool, side_project_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: library }))
}

/// PUT /api/v1/side-projects/{side_project_id}/dependency-libraries/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<DependencyLibraryInput>,
) -> AppResult<Json<DataResponse<DependencyLibrary>>> {
    input.validate()?;
    let library = DependencyLibraryRepo::update(&state.pool, side_project_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        dependency_library_id = id,
        side_project_id,
        subject = %auth.subject,
        "DependencyLibrary updated"
    );

    Ok(Json(DataResponse { data: library }))
}

/// DELETE /api/v1/side-projects/{side_project_id}/dependency-libraries/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if DependencyLibraryRepo::delete(&state.pool, side_project_id, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(
        dependency_library_id = id,
        side_project_id,
        subject = %auth.subject,
        "DependencyLibrary deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
