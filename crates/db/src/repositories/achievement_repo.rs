//! Repository for the `achievements` table.
//!
//! Every achievement belongs to exactly one of four owner kinds. Queries are
//! addressed through [`AchievementOwner`], which picks the owning column; the
//! column names come from a closed enum, never from request input.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::achievement::{Achievement, AchievementInput, AchievementOwner, AchievementRow};
use crate::references::{resolve_all, resolve_optional, resolve_reference, ResolveReferences};
use crate::repositories::ImageRepo;

const COLUMNS: &str = "id, work_experience_id, education_id, volunteer_work_id, \
    open_source_contribution_id, description, icon_image_id, created_at, updated_at";

/// Provides CRUD operations for achievements, scoped by owner.
pub struct AchievementRepo;

impl AchievementRepo {
    /// Whether the owner row exists.
    pub async fn owner_exists(pool: &PgPool, owner: AchievementOwner) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", owner.table());
        sqlx::query_scalar::<_, bool>(&query)
            .bind(owner.id())
            .fetch_one(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        owner: AchievementOwner,
        input: &AchievementInput,
    ) -> Result<Achievement, sqlx::Error> {
        let query = format!(
            "INSERT INTO achievements ({}, description, icon_image_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}",
            owner.column()
        );
        let row = sqlx::query_as::<_, AchievementRow>(&query)
            .bind(owner.id())
            .bind(&input.description)
            .bind(input.icon_image_id)
            .fetch_one(pool)
            .await?;
        row.resolve(pool).await
    }

    /// Find an achievement only if it belongs to `owner`.
    pub async fn find_for_owner(
        pool: &PgPool,
        owner: AchievementOwner,
        id: DbId,
    ) -> Result<Option<Achievement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM achievements WHERE id = $1 AND {} = $2",
            owner.column()
        );
        let row = sqlx::query_as::<_, AchievementRow>(&query)
            .bind(id)
            .bind(owner.id())
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn list_by_owner(
        pool: &PgPool,
        owner: AchievementOwner,
    ) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM achievements WHERE {} = $1 ORDER BY id",
            owner.column()
        );
        let rows = sqlx::query_as::<_, AchievementRow>(&query)
            .bind(owner.id())
            .fetch_all(pool)
            .await?;
        resolve_all(pool, rows).await
    }

    /// Replace description and icon. The owner never changes.
    pub async fn update(
        pool: &PgPool,
        owner: AchievementOwner,
        id: DbId,
        input: &AchievementInput,
    ) -> Result<Option<Achievement>, sqlx::Error> {
        let query = format!(
            "UPDATE achievements SET description = $3, icon_image_id = $4
             WHERE id = $1 AND {} = $2
             RETURNING {COLUMNS}",
            owner.column()
        );
        let row = sqlx::query_as::<_, AchievementRow>(&query)
            .bind(id)
            .bind(owner.id())
            .bind(&input.description)
            .bind(input.icon_image_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn delete(
        pool: &PgPool,
        owner: AchievementOwner,
        id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "DELETE FROM achievements WHERE id = $1 AND {} = $2",
            owner.column()
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(owner.id())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl ResolveReferences for AchievementRow {
    type Output = Achievement;

    async fn resolve(self, pool: &PgPool) -> Result<Achievement, sqlx::Error> {
        let icon_image = resolve_reference::<ImageRepo>(pool, self.icon_image_id).await?;

        Ok(Achievement {
            id: self.id,
            work_experience_id: self.work_experience_id,
            education_id: self.education_id,
            volunteer_work_id: self.volunteer_work_id,
            open_source_contribution_id: self.open_source_contribution_id,
            description: self.description,
            icon_image_id: self.icon_image_id,
            icon_image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
