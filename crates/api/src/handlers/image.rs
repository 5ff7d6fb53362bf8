//! Handlers for the `/images` resource.
//!
//! Images are shared leaf records; deleting one clears every reference to it
//! instead of deleting the referencing rows.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::image::{Image, ImageInput};
use folio_db::repositories::ImageRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Image", id })
}

/// POST /api/v1/images
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<ImageInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Image>>)> {
    input.validate()?;
    let image = ImageRepo::create(&state.pool, &input).await?;

    tracing::info!(image_id = image.id, subject = %auth.subject, "Image created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}

/// GET /api/v1/images
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Image>>>> {
    let images = ImageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: images }))
}

/// GET /api/v1/images/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Image>>> {
    let image = ImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: image }))
}

/// PUT /api/v1/images/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ImageInput>,
) -> AppResult<Json<DataResponse<Image>>> {
    input.validate()?;
    let image = ImageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(image_id = id, subject = %auth.subject, "Image updated");

    Ok(Json(DataResponse { data: image }))
}

/// DELETE /api/v1/images/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if ImageRepo::delete(&state.pool, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(image_id = id, subject = %auth.subject, "Image deleted");

    Ok(StatusCode::NO_CONTENT)
}
