//! Repository for the `open_source_contributions` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::open_source_contribution::{
    OpenSourceContribution, OpenSourceContributionInput, OpenSourceContributionRow,
};
use crate::references::{resolve_all, resolve_optional, resolve_reference, ResolveReferences};
use crate::repositories::{ImageRepo, WebsiteRepo};

const COLUMNS: &str = "id, portfolio_id, project_name, organization_name, description, \
    start_date, end_date, project_logo_id, organization_website_id, repository_website_id, \
    created_at, updated_at";

/// Provides CRUD operations for open-source contributions, scoped by portfolio.
pub struct OpenSourceContributionRepo;

impl OpenSourceContributionRepo {
    pub async fn create(
        pool: &PgPool,
        portfolio_id: DbId,
        input: &OpenSourceContributionInput,
    ) -> Result<OpenSourceContribution, sqlx::Error> {
        let query = format!(
            "INSERT INTO open_source_contributions
                (portfolio_id, project_name, organization_name, description,
                 start_date, end_date, project_logo_id,
                 organization_website_id, repository_website_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, OpenSourceContributionRow>(&query)
            .bind(portfolio_id)
            .bind(&input.project_name)
            .bind(&input.organization_name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.project_logo_id)
            .bind(input.organization_website_id)
            .bind(input.repository_website_id)
            .fetch_one(pool)
            .await?;
        row.resolve(pool).await
    }

    pub async fn find_in_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
    ) -> Result<Option<OpenSourceContribution>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM open_source_contributions WHERE id = $1 AND portfolio_id = $2"
        );
        let row = sqlx::query_as::<_, OpenSourceContributionRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn list_by_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Vec<OpenSourceContribution>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM open_source_contributions WHERE portfolio_id = $1 ORDER BY id"
        );
        let rows = sqlx::query_as::<_, OpenSourceContributionRow>(&query)
            .bind(portfolio_id)
            .fetch_all(pool)
            .await?;
        resolve_all(pool, rows).await
    }

    pub async fn update(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
        input: &OpenSourceContributionInput,
    ) -> Result<Option<OpenSourceContribution>, sqlx::Error> {
        let query = format!(
            "UPDATE open_source_contributions SET
                project_name = $3,
                organization_name = $4,
                description = $5,
                start_date = $6,
                end_date = $7,
                project_logo_id = $8,
                organization_website_id = $9,
                repository_website_id = $10
             WHERE id = $1 AND portfolio_id = $2
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, OpenSourceContributionRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .bind(&input.project_name)
            .bind(&input.organization_name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.project_logo_id)
            .bind(input.organization_website_id)
            .bind(input.repository_website_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn delete(pool: &PgPool, portfolio_id: DbId, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM open_source_contributions WHERE id = $1 AND portfolio_id = $2",
        )
        .bind(id)
        .bind(portfolio_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

impl ResolveReferences for OpenSourceContributionRow {
    type Output = OpenSourceContribution;

    async fn resolve(self, pool: &PgPool) -> Result<OpenSourceContribution, sqlx::Error> {
        let project_logo = resolve_reference::<ImageRepo>(pool, self.project_logo_id).await?;
        let organization_website =
            resolve_reference::<WebsiteRepo>(pool, self.organization_website_id).await?;
        let repository_website =
            resolve_reference::<WebsiteRepo>(pool, self.repository_website_id).await?;

        Ok(OpenSourceContribution {
            id: self.id,
            portfolio_id: self.portfolio_id,
            project_name: self.project_name,
            organization_name: self.organization_name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            project_logo_id: self.project_logo_id,
            project_logo,
            organization_website_id: self.organization_website_id,
            organization_website,
            repository_website_id: self.repository_website_id,
            repository_website,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
