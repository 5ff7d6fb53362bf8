//! Repository for the `work_experiences` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::work_experience::{WorkExperience, WorkExperienceInput, WorkExperienceRow};
use crate::references::{resolve_all, resolve_optional, resolve_reference, ResolveReferences};
use crate::repositories::{ImageRepo, WebsiteRepo};

const COLUMNS: &str = "id, portfolio_id, company_name, position, location, description, \
    start_date, end_date, company_logo_id, company_website_id, created_at, updated_at";

/// Provides CRUD operations for work experiences, scoped by portfolio.
pub struct WorkExperienceRepo;

impl WorkExperienceRepo {
    pub async fn create(
        pool: &PgPool,
        portfolio_id: DbId,
        input: &WorkExperienceInput,
    ) -> Result<WorkExperience, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_experiences
                (portfolio_id, company_name, position, location, description,
                 start_date, end_date, company_logo_id, company_website_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, WorkExperienceRow>(&query)
            .bind(portfolio_id)
            .bind(&input.company_name)
            .bind(&input.position)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.company_logo_id)
            .bind(input.company_website_id)
            .fetch_one(pool)
            .await?;
        row.resolve(pool).await
    }

    pub async fn find_in_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
    ) -> Result<Option<WorkExperience>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM work_experiences WHERE id = $1 AND portfolio_id = $2");
        let row = sqlx::query_as::<_, WorkExperienceRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    /// List a portfolio's work history, oldest row first.
    pub async fn list_by_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Vec<WorkExperience>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM work_experiences WHERE portfolio_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, WorkExperienceRow>(&query)
            .bind(portfolio_id)
            .fetch_all(pool)
            .await?;
        resolve_all(pool, rows).await
    }

    pub async fn update(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
        input: &WorkExperienceInput,
    ) -> Result<Option<WorkExperience>, sqlx::Error> {
        let query = format!(
            "UPDATE work_experiences SET
                company_name = $3,
                position = $4,
                location = $5,
                description = $6,
                start_date = $7,
                end_date = $8,
                company_logo_id = $9,
                company_website_id = $10
             WHERE id = $1 AND portfolio_id = $2
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, WorkExperienceRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .bind(&input.company_name)
            .bind(&input.position)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.company_logo_id)
            .bind(input.company_website_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn delete(pool: &PgPool, portfolio_id: DbId, id: DbId) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM work_experiences WHERE id = $1 AND portfolio_id = $2")
                .bind(id)
                .bind(portfolio_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}

impl ResolveReferences for WorkExperienceRow {
    type Output = WorkExperience;

    async fn resolve(self, pool: &PgPool) -> Result<WorkExperience, sqlx::Error> {
        let company_logo = resolve_reference::<ImageRepo>(pool, self.company_logo_id).await?;
        let company_website =
            resolve_reference::<WebsiteRepo>(pool, self.company_website_id).await?;

        Ok(WorkExperience {
            id: self.id,
            portfolio_id: self.portfolio_id,
            company_name: self.company_name,
            position: self.position,
            location: self.location,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            company_logo_id: self.company_logo_id,
            company_logo,
            company_website_id: self.company_website_id,
            company_website,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
