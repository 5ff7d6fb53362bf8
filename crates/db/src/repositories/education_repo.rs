//! Repository for the `educations` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::education::{Education, EducationInput, EducationRow};
use crate::references::{resolve_all, resolve_optional, resolve_reference, ResolveReferences};
use crate::repositories::{ImageRepo, WebsiteRepo};

const COLUMNS: &str = "id, portfolio_id, institution_name, degree, field_of_study, location, \
    description, start_date, graduation_date, institution_logo_id, institution_website_id, \
    created_at, updated_at";

/// Provides CRUD operations for education entries, scoped by portfolio.
pub struct EducationRepo;

impl EducationRepo {
    pub async fn create(
        pool: &PgPool,
        portfolio_id: DbId,
        input: &EducationInput,
    ) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO educations
                (portfolio_id, institution_name, degree, field_of_study, location,
                 description, start_date, graduation_date,
                 institution_logo_id, institution_website_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, EducationRow>(&query)
            .bind(portfolio_id)
            .bind(&input.institution_name)
            .bind(&input.degree)
            .bind(&input.field_of_study)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.graduation_date)
            .bind(input.institution_logo_id)
            .bind(input.institution_website_id)
            .fetch_one(pool)
            .await?;
        row.resolve(pool).await
    }

    pub async fn find_in_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM educations WHERE id = $1 AND portfolio_id = $2");
        let row = sqlx::query_as::<_, EducationRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn list_by_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Vec<Education>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM educations WHERE portfolio_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, EducationRow>(&query)
            .bind(portfolio_id)
            .fetch_all(pool)
            .await?;
        resolve_all(pool, rows).await
    }

    pub async fn update(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
        input: &EducationInput,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!(
            "UPDATE educations SET
                institution_name = $3,
                degree = $4,
                field_of_study = $5,
                location = $6,
                description = $7,
                start_date = $8,
                graduation_date = $9,
                institution_logo_id = $10,
                institution_website_id = $11
             WHERE id = $1 AND portfolio_id = $2
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, EducationRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .bind(&input.institution_name)
            .bind(&input.degree)
            .bind(&input.field_of_study)
            .bind(&input.location)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.graduation_date)
            .bind(input.institution_logo_id)
            .bind(input.institution_website_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn delete(pool: &PgPool, portfolio_id: DbId, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM educations WHERE id = $1 AND portfolio_id = $2")
            .bind(id)
            .bind(portfolio_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl ResolveReferences for EducationRow {
    type Output = Education;

    async fn resolve(self, pool: &PgPool) -> Result<Education, sqlx::Error> {
        let institution_logo =
            resolve_reference::<ImageRepo>(pool, self.institution_logo_id).await?;
        let institution_website =
            resolve_reference::<WebsiteRepo>(pool, self.institution_website_id).await?;

        Ok(Education {
            id: self.id,
            portfolio_id: self.portfolio_id,
            institution_name: self.institution_name,
            degree: self.degree,
            field_of_study: self.field_of_study,
            location: self.location,
            description: self.description,
            start_date: self.start_date,
            graduation_date: self.graduation_date,
            institution_logo_id: self.institution_logo_id,
            institution_logo,
            institution_website_id: self.institution_website_id,
            institution_website,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
