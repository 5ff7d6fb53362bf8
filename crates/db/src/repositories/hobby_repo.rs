//! Repository for the `hobbies` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::hobby::{Hobby, HobbyInput, HobbyRow};
use crate::references::{resolve_all, resolve_optional, resolve_reference, ResolveReferences};
use crate::repositories::ImageRepo;

const COLUMNS: &str = "id, portfolio_id, description, image_id, created_at, updated_at";

/// Provides CRUD operations for hobbies, scoped by portfolio.
pub struct HobbyRepo;

impl HobbyRepo {
    /// Insert a new hobby under `portfolio_id`.
    pub async fn create(
        pool: &PgPool,
        portfolio_id: DbId,
        input: &HobbyInput,
    ) -> Result<Hobby, sqlx::Error> {
        let query = format!(
            "INSERT INTO hobbies (portfolio_id, description, image_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, HobbyRow>(&query)
            .bind(portfolio_id)
            .bind(&input.description)
            .bind(input.image_id)
            .fetch_one(pool)
            .await?;
        row.resolve(pool).await
    }

    /// Find a hobby only if it belongs to `portfolio_id`.
    pub async fn find_in_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
    ) -> Result<Option<Hobby>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hobbies WHERE id = $1 AND portfolio_id = $2");
        let row = sqlx::query_as::<_, HobbyRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    /// List a portfolio's hobbies ordered by ID.
    pub async fn list_by_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Vec<Hobby>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hobbies WHERE portfolio_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, HobbyRow>(&query)
            .bind(portfolio_id)
            .fetch_all(pool)
            .await?;
        resolve_all(pool, rows).await
    }

    /// Overwrite a hobby belonging to `portfolio_id`. Returns `None` if no such row.
    pub async fn update(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
        input: &HobbyInput,
    ) -> Result<Option<Hobby>, sqlx::Error> {
        let query = format!(
            "UPDATE hobbies SET description = $3, image_id = $4
             WHERE id = $1 AND portfolio_id = $2
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, HobbyRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .bind(&input.description)
            .bind(input.image_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    /// Delete a hobby belonging to `portfolio_id`, returning the rows removed.
    pub async fn delete(pool: &PgPool, portfolio_id: DbId, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hobbies WHERE id = $1 AND portfolio_id = $2")
            .bind(id)
            .bind(portfolio_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl ResolveReferences for HobbyRow {
    type Output = Hobby;

    async fn resolve(self, pool: &PgPool) -> Result<Hobby, sqlx::Error> {
        let image = resolve_reference::<ImageRepo>(pool, self.image_id).await?;
        Ok(Hobby {
            id: self.id,
            portfolio_id: self.portfolio_id,
            description: self.description,
            image_id: self.image_id,
            image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
