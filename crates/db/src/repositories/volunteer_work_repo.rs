//! Repository for the `volunteer_works` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::volunteer_work::{VolunteerWork, VolunteerWorkInput, VolunteerWorkRow};
use crate::references::{resolve_all, resolve_optional, resolve_reference, ResolveReferences};
use crate::repositories::{ImageRepo, WebsiteRepo};

const COLUMNS: &str = "id, portfolio_id, organization_name, position, location, description, \
    start_date, end_date, organization_logo_id, organization_website_id, created_at, updated_at";

/// Provides CRUD operations for volunteer work, scoped by portfolio.
pub struct VolunteerWorkRepo;

impl VolunteerWorkRepo {
    pub async fn create(
        pool: &PgPool,
        portfolio_id: DbId,
        input: &VolunteerWorkInput,
    ) -> Result<VolunteerWork, sqlx::Error> {
        let query = format!(
            "INSERT INTO volunteer_works
                (portfolio_id, organization_name, position, location, description,
                 start_date, end_date, organization_logo_id, organization_website_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, VolunteerWorkRow>(&query)
            .bind(portfolio_id)
            .bind(&input.organization_name)
            .bind(&input.position)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.organization_logo_id)
            .bind(input.organization_website_id)
            .fetch_one(pool)
            .await?;
        row.resolve(pool).await
    }

    pub async fn find_in_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
    ) -> Result<Option<VolunteerWork>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM volunteer_works WHERE id = $1 AND portfolio_id = $2");
        let row = sqlx::query_as::<_, VolunteerWorkRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn list_by_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Vec<VolunteerWork>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM volunteer_works WHERE portfolio_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, VolunteerWorkRow>(&query)
            .bind(portfolio_id)
            .fetch_all(pool)
            .await?;
        resolve_all(pool, rows).await
    }

    pub async fn update(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
        input: &VolunteerWorkInput,
    ) -> Result<Option<VolunteerWork>, sqlx::Error> {
        let query = format!(
            "UPDATE volunteer_works SET
                organization_name = $3,
                position = $4,
                location = $5,
                description = $6,
                start_date = $7,
                end_date = $8,
                organization_logo_id = $9,
                organization_website_id = $10
             WHERE id = $1 AND portfolio_id = $2
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, VolunteerWorkRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .bind(&input.organization_name)
            .bind(&input.position)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.organization_logo_id)
            .bind(input.organization_website_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn delete(pool: &PgPool, portfolio_id: DbId, id: DbId) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM volunteer_works WHERE id = $1 AND portfolio_id = $2")
                .bind(id)
                .bind(portfolio_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}

impl ResolveReferences for VolunteerWorkRow {
    type Output = VolunteerWork;

    async fn resolve(self, pool: &PgPool) -> Result<VolunteerWork, sqlx::Error> {
        let organization_logo =
            resolve_reference::<ImageRepo>(pool, self.organization_logo_id).await?;
        let organization_website =
            resolve_reference::<WebsiteRepo>(pool, self.organization_website_id).await?;

        Ok(VolunteerWork {
            id: self.id,
            portfolio_id: self.portfolio_id,
            organization_name: self.organization_name,
            position: self.position,
            location: self.location,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            organization_logo_id: self.organization_logo_id,
            organization_logo,
            organization_website_id: self.organization_website_id,
            organization_website,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
