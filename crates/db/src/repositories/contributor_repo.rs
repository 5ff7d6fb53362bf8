//! Repository for the `contributors` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::contributor::{Contributor, ContributorInput, ContributorRow};
use crate::references::{resolve_all, resolve_optional, resolve_reference, ResolveReferences};
use crate::repositories::{ImageRepo, WebsiteRepo};

const COLUMNS: &str = "id, side_project_id, first_name, last_name, email, bio, \
    contribution_details, headshot_id, linkedin_website_id, github_website_id, \
    portfolio_website_id, created_at, updated_at";

/// Provides CRUD operations for contributors, scoped by side project.
pub struct ContributorRepo;

impl ContributorRepo {
    pub async fn create(
        pool: &PgPool,
        side_project_id: DbId,
        input: &ContributorInput,
    ) -> Result<Contributor, sqlx::Error> {
        let query = format!(
            "INSERT INTO contributors
                (side_project_id, first_name, last_name, email, bio, contribution_details,
                 headshot_id, linkedin_website_id, github_website_id, portfolio_website_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContributorRow>(&query)
            .bind(side_project_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.bio)
            .bind(&input.contribution_details)
            .bind(input.headshot_id)
            .bind(input.linkedin_website_id)
            .bind(input.github_website_id)
            .bind(input.portfolio_website_id)
            .fetch_one(pool)
            .await?;
        row.resolve(pool).await
    }

    /// Find a contributor only if it belongs to `side_project_id`.
    pub async fn find_in_side_project(
        pool: &PgPool,
        side_project_id: DbId,
        id: DbId,
    ) -> Result<Option<Contributor>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM contributors WHERE id = $1 AND side_project_id = $2");
        let row = sqlx::query_as::<_, ContributorRow>(&query)
            .bind(id)
            .bind(side_project_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn list_by_side_project(
        pool: &PgPool,
        side_project_id: DbId,
    ) -> Result<Vec<Contributor>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM contributors WHERE side_project_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, ContributorRow>(&query)
            .bind(side_project_id)
            .fetch_all(pool)
            .await?;
        resolve_all(pool, rows).await
    }

    pub async fn update(
        pool: &PgPool,
        side_project_id: DbId,
        id: DbId,
        input: &ContributorInput,
    ) -> Result<Option<Contributor>, sqlx::Error> {
        let query = format!(
            "UPDATE contributors SET
                first_name = $3,
                last_name = $4,
                email = $5,
                bio = $6,
                contribution_details = $7,
                headshot_id = $8,
                linkedin_website_id = $9,
                github_website_id = $10,
                portfolio_website_id = $11
             WHERE id = $1 AND side_project_id = $2
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContributorRow>(&query)
            .bind(id)
            .bind(side_project_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.bio)
            .bind(&input.contribution_details)
            .bind(input.headshot_id)
            .bind(input.linkedin_website_id)
            .bind(input.github_website_id)
            .bind(input.portfolio_website_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn delete(
        pool: &PgPool,
        side_project_id: DbId,
        id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM contributors WHERE id = $1 AND side_project_id = $2")
                .bind(id)
                .bind(side_project_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}

impl ResolveReferences for ContributorRow {
    type Output = Contributor;

    async fn resolve(self, pool: &PgPool) -> Result<Contributor, sqlx::Error> {
        let headshot = resolve_reference::<ImageRepo>(pool, self.headshot_id).await?;
        let linkedin_website =
            resolve_reference::<WebsiteRepo>(pool, self.linkedin_website_id).await?;
        let github_website = resolve_reference::<WebsiteRepo>(pool, self.github_website_id).await?;
        let portfolio_website =
            resolve_reference::<WebsiteRepo>(pool, self.portfolio_website_id).await?;

        Ok(Contributor {
            id: self.id,
            side_project_id: self.side_project_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            bio: self.bio,
            contribution_details: self.contribution_details,
            headshot_id: self.headshot_id,
            headshot,
            linkedin_website_id: self.linkedin_website_id,
            linkedin_website,
            github_website_id: self.github_website_id,
            github_website,
            portfolio_website_id: self.portfolio_website_id,
            portfolio_website,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
