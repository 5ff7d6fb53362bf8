//! Repository for the `side_projects` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::side_project::{SideProject, SideProjectInput, SideProjectRow};
use crate::references::{resolve_all, resolve_optional, resolve_reference, ResolveReferences};
use crate::repositories::{ImageRepo, WebsiteRepo};

const COLUMNS: &str = "id, portfolio_id, name, description, start_date, finish_date, \
    logo_image_id, website_id, repository_website_id, created_at, updated_at";

/// Provides CRUD operations for side projects, scoped by portfolio.
pub struct SideProjectRepo;

impl SideProjectRepo {
    pub async fn create(
        pool: &PgPool,
        portfolio_id: DbId,
        input: &SideProjectInput,
    ) -> Result<SideProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO side_projects
                (portfolio_id, name, description, start_date, finish_date,
                 logo_image_id, website_id, repository_website_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SideProjectRow>(&query)
            .bind(portfolio_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.finish_date)
            .bind(input.logo_image_id)
            .bind(input.website_id)
            .bind(input.repository_website_id)
            .fetch_one(pool)
            .await?;
        row.resolve(pool).await
    }

    /// Cheap existence check used to validate parent IDs in request paths.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM side_projects WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a side project only if it belongs to `portfolio_id`.
    pub async fn find_in_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
    ) -> Result<Option<SideProject>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM side_projects WHERE id = $1 AND portfolio_id = $2");
        let row = sqlx::query_as::<_, SideProjectRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn list_by_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Vec<SideProject>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM side_projects WHERE portfolio_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, SideProjectRow>(&query)
            .bind(portfolio_id)
            .fetch_all(pool)
            .await?;
        resolve_all(pool, rows).await
    }

    /// Overwrite a side project belonging to `portfolio_id`.
    pub async fn update(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
        input: &SideProjectInput,
    ) -> Result<Option<SideProject>, sqlx::Error> {
        let query = format!(
            "UPDATE side_projects SET
                name = $3,
                description = $4,
                start_date = $5,
                finish_date = $6,
                logo_image_id = $7,
                website_id = $8,
                repository_website_id = $9
             WHERE id = $1 AND portfolio_id = $2
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SideProjectRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.finish_date)
            .bind(input.logo_image_id)
            .bind(input.website_id)
            .bind(input.repository_website_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    /// Delete a side project (and, by cascade, its goals, contributors, API
    /// services, libraries and skill links).
    pub async fn delete(pool: &PgPool, portfolio_id: DbId, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM side_projects WHERE id = $1 AND portfolio_id = $2")
            .bind(id)
            .bind(portfolio_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl ResolveReferences for SideProjectRow {
    type Output = SideProject;

    async fn resolve(self, pool: &PgPool) -> Result<SideProject, sqlx::Error> {
        let logo_image = resolve_reference::<ImageRepo>(pool, self.logo_image_id).await?;
        let website = resolve_reference::<WebsiteRepo>(pool, self.website_id).await?;
        let repository_website =
            resolve_reference::<WebsiteRepo>(pool, self.repository_website_id).await?;

        Ok(SideProject {
            id: self.id,
            portfolio_id: self.portfolio_id,
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            finish_date: self.finish_date,
            logo_image_id: self.logo_image_id,
            logo_image,
            website_id: self.website_id,
            website,
            repository_website_id: self.repository_website_id,
            repository_website,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
