//! Handlers for the skills attached to a portfolio or a side project.
//!
//! Mounted at `/portfolios/{portfolio_id}/skills` and
//! `/side-projects/{side_project_id}/skills`. The handlers are generic over
//! an [`OwnerKind`] marker, which turns the owner id in the path into a
//! [`SkillOwner`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill::{Skill, SkillInput, SkillOwner};
use folio_db::repositories::SkillRepo;
use folio_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Selects which owner table a skill route addresses.
pub trait OwnerKind: Send + Sync + 'static {
    fn owner(id: DbId) -> SkillOwner;
}

/// `/portfolios/{portfolio_id}/skills`
pub struct PortfolioSkills;

impl OwnerKind for PortfolioSkills {
    fn owner(id: DbId) -> SkillOwner {
        SkillOwner::Portfolio(id)
    }
}

/// `/side-projects/{side_project_id}/skills`
pub struct SideProjectSkills;

impl OwnerKind for SideProjectSkills {
    fn owner(id: DbId) -> SkillOwner {
        SkillOwner::SideProject(id)
    }
}

async fn ensure_owner_exists(pool: &DbPool, owner: SkillOwner) -> AppResult<()> {
    if SkillRepo::owner_exists(pool, owner).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: owner.entity(),
            id: owner.id(),
        }))
    }
}

/// GET .../{owner_id}/skills
pub async fn list<K: OwnerKind>(
    State(state): State<AppState>,
    AppPath(owner_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<Skill>>>> {
    let owner = K::owner(owner_id);
    ensure_owner_exists(&state.pool, owner).await?;
    let skills = SkillRepo::list_by_owner(&state.pool, owner).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// POST .../{owner_id}/skills
///
/// Finds the skill by name, creating it if needed, and attaches it to the
/// owner in one transaction. Repeating the call is harmless.
pub async fn create_and_attach<K: OwnerKind>(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(owner_id): AppPath<DbId>,
    AppJson(input): AppJson<SkillInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Skill>>)> {
    input.validate()?;
    let owner = K::owner(owner_id);
    ensure_owner_exists(&state.pool, owner).await?;

    let skill = SkillRepo::create_and_attach(&state.pool, owner, &input).await?;

    tracing::info!(
        skill_id = skill.id,
        owner = owner.entity(),
        owner_id,
        subject = %auth.subject,
        "Skill attached by name"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

/// PUT .../{owner_id}/skills/{skill_id}
///
/// Idempotent. Returns the attached skill.
pub async fn attach<K: OwnerKind>(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((owner_id, skill_id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Skill>>> {
    let owner = K::owner(owner_id);
    ensure_owner_exists(&state.pool, owner).await?;
    let skill = SkillRepo::find_by_id(&state.pool, skill_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id: skill_id,
        }))?;

    let created = SkillRepo::attach(&state.pool, owner, skill_id).await?;
    if created {
        tracing::info!(
            skill_id,
            owner = owner.entity(),
            owner_id,
            subject = %auth.subject,
            "Skill attached"
        );
    }

    Ok(Json(DataResponse { data: skill }))
}

/// DELETE .../{owner_id}/skills/{skill_id}
///
/// Removes the association only; the skill itself is kept.
pub async fn detach<K: OwnerKind>(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((owner_id, skill_id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let owner = K::owner(owner_id);
    if SkillRepo::detach(&state.pool, owner, skill_id).await? == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id: skill_id,
        }));
    }

    tracing::info!(
        skill_id,
        owner = owner.entity(),
        owner_id,
        subject = %auth.subject,
        "Skill detached"
    );

    Ok(StatusCode::NO_CONTENT)
}
