//! Handlers for `/side-projects/{side_project_id}/api-services`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::api_service::{ApiService, ApiServiceInput};
use folio_db::repositories::ApiServiceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_side_project_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ApiService",
        id,
    })
}

/// POST /api/v1/side-projects/{side_project_id}/api-services
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(side_project_id): AppPath<DbId>,
    AppJson(input): AppJson<ApiServiceInput>,
) -> AppResult<(StatusCode, Json<DataResponse<ApiService>>)> {
    input.validate()?;
    ensure_side_project_exists(&state.pool, side_project_id).await?;
    let api_service = ApiServiceRepo::create(&state.pool, side_project_id, &input).await?;

    tracing::info!(
        api_service_id = api_service.id,
        side_project_id,
        subject = %auth.subject,
        "ApiService created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: api_service })))
}

/// GET /api/v1/side-projects/{side_project_id}/api-services
pub async fn list_by_side_project(
    State(state): State<AppState>,
    AppPath(side_project_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<ApiService>>>> {
    ensure_side_project_exists(&state.pool, side_project_id).await?;
    let api_services = ApiServiceRepo::list_by_side_project(&state.pool, side_project_id).await?;
    Ok(Json(DataResponse { data: api_services }))
}

/// GET /api/v1/side-projects/{side_project_id}/api-services/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<ApiService>>> {
    let api_service = ApiServiceRepo::find_in_side_project(&state.pool, side_project_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: api_service }))
}

/// PUT /api/v1/side-projects/{side_project_id}/api-services/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<ApiServiceInput>,
) -> AppResult<Json<DataResponse<ApiService>>> {
    input.validate()?;
    let api_service = ApiServiceRepo::update(&state.pool, side_project_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        api_service_id = id,
        side_project_id,
        subject = %auth.subject,
        "ApiService updated"
    );

    Ok(Json(DataResponse { data: api_service }))
}

/// DELETE /api/v1/side-projects/{side_project_id}/api-services/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((side_project_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if ApiServiceRepo::delete(&state.pool, side_project_id, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(
        api_service_id = id,
        side_project_id,
        subject = %auth.subject,
        "ApiService deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
