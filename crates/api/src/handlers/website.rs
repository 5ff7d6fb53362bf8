//! Handlers for the `/websites` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::website::{Website, WebsiteInput};
use folio_db::repositories::WebsiteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Website", id })
}

/// POST /api/v1/websites
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<WebsiteInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Website>>)> {
    input.validate()?;
    let website = WebsiteRepo::create(&state.pool, &input).await?;

    tracing::info!(website_id = website.id, subject = %auth.subject, "Website created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: website })))
}

/// GET /api/v1/websites
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Website>>>> {
    let websites = WebsiteRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: websites }))
}

/// GET /api/v1/websites/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Website>>> {
    let website = WebsiteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: website }))
}

/// PUT /api/v1/websites/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<WebsiteInput>,
) -> AppResult<Json<DataResponse<Website>>> {
    input.validate()?;
    let website = WebsiteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(website_id = id, subject = %auth.subject, "Website updated");

    Ok(Json(DataResponse { data: website }))
}

/// DELETE /api/v1/websites/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if WebsiteRepo::delete(&state.pool, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(website_id = id, subject = %auth.subject, "Website deleted");

    Ok(StatusCode::NO_CONTENT)
}
