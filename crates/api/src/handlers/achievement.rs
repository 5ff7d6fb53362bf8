//! Handlers for achievements.
//!
//! Achievements hang off work experiences, educations, volunteer work and
//! open-source contributions, each mounted as
//! `/{owner-collection}/{owner_id}/achievements`. The handlers are generic
//! over an [`OwnerKind`] marker selecting the owner column.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::achievement::{Achievement, AchievementInput, AchievementOwner};
use folio_db::repositories::AchievementRepo;
use folio_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maps an owner id from the path to an [`AchievementOwner`].
pub trait OwnerKind: Send + Sync + 'static {
    fn owner(id: DbId) -> AchievementOwner;
}

pub struct WorkExperienceOwner;
pub struct EducationOwner;
pub struct VolunteerWorkOwner;
pub struct OpenSourceContributionOwner;

impl OwnerKind for WorkExperienceOwner {
    fn owner(id: DbId) -> AchievementOwner {
        AchievementOwner::WorkExperience(id)
    }
}

impl OwnerKind for EducationOwner {
    fn owner(id: DbId) -> AchievementOwner {
        AchievementOwner::Education(id)
    }
}

impl OwnerKind for VolunteerWorkOwner {
    fn owner(id: DbId) -> AchievementOwner {
        AchievementOwner::VolunteerWork(id)
    }
}

impl OwnerKind for OpenSourceContributionOwner {
    fn owner(id: DbId) -> AchievementOwner {
        AchievementOwner::OpenSourceContribution(id)
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Achievement",
        id,
    })
}

async fn ensure_owner_exists(pool: &DbPool, owner: AchievementOwner) -> AppResult<()> {
    if AchievementRepo::owner_exists(pool, owner).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: owner.entity(),
            id: owner.id(),
        }))
    }
}

/// POST .../{owner_id}/achievements
pub async fn create<K: OwnerKind>(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(owner_id): AppPath<DbId>,
    AppJson(input): AppJson<AchievementInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Achievement>>)> {
    input.validate()?;
    let owner = K::owner(owner_id);
    ensure_owner_exists(&state.pool, owner).await?;

    let achievement = AchievementRepo::create(&state.pool, owner, &input).await?;

    tracing::info!(
        achievement_id = achievement.id,
        owner = owner.entity(),
        owner_id,
        subject = %auth.subject,
        "Achievement created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: achievement })))
}

/// GET .../{owner_id}/achievements
pub async fn list<K: OwnerKind>(
    State(state): State<AppState>,
    AppPath(owner_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<Achievement>>>> {
    let owner = K::owner(owner_id);
    ensure_owner_exists(&state.pool, owner).await?;
    let achievements = AchievementRepo::list_by_owner(&state.pool, owner).await?;
    Ok(Json(DataResponse { data: achievements }))
}

/// GET .../{owner_id}/achievements/{id}
pub async fn get_by_id<K: OwnerKind>(
    State(state): State<AppState>,
    AppPath((owner_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Achievement>>> {
    let achievement = AchievementRepo::find_for_owner(&state.pool, K::owner(owner_id), id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: achievement }))
}

/// PUT .../{owner_id}/achievements/{id}
pub async fn update<K: OwnerKind>(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((owner_id, id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<AchievementInput>,
) -> AppResult<Json<DataResponse<Achievement>>> {
    input.validate()?;
    let owner = K::owner(owner_id);
    let achievement = AchievementRepo::update(&state.pool, owner, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        achievement_id = id,
        owner = owner.entity(),
        owner_id,
        subject = %auth.subject,
        "Achievement updated"
    );

    Ok(Json(DataResponse { data: achievement }))
}

/// DELETE .../{owner_id}/achievements/{id}
pub async fn delete<K: OwnerKind>(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((owner_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let owner = K::owner(owner_id);
    if AchievementRepo::delete(&state.pool, owner, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(
        achievement_id = id,
        owner = owner.entity(),
        owner_id,
        subject = %auth.subject,
        "Achievement deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
