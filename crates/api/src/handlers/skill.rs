//! Handlers for the `/skills` resource.
//!
//! Skill names are unique; a duplicate create or rename is answered with 409.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill::{Skill, SkillInput};
use folio_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Skill", id })
}

/// POST /api/v1/skills
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<SkillInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Skill>>)> {
    input.validate()?;
    let skill = SkillRepo::create(&state.pool, &input).await?;

    tracing::info!(skill_id = skill.id, subject = %auth.subject, "Skill created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

/// GET /api/v1/skills
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Skill>>>> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// GET /api/v1/skills/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Skill>>> {
    let skill = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: skill }))
}

/// PUT /api/v1/skills/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<SkillInput>,
) -> AppResult<Json<DataResponse<Skill>>> {
    input.validate()?;
    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(skill_id = id, subject = %auth.subject, "Skill updated");

    Ok(Json(DataResponse { data: skill }))
}

/// DELETE /api/v1/skills/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if SkillRepo::delete(&state.pool, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(skill_id = id, subject = %auth.subject, "Skill deleted");

    Ok(StatusCode::NO_CONTENT)
}
