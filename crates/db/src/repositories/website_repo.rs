//! Repository for the `websites` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::website::{Website, WebsiteInput};
use crate::references::ReferenceLookup;

const COLUMNS: &str = "id, name, url, created_at, updated_at";

/// Provides CRUD operations for websites.
pub struct WebsiteRepo;

impl WebsiteRepo {
    pub async fn create(pool: &PgPool, input: &WebsiteInput) -> Result<Website, sqlx::Error> {
        let query = format!(
            "INSERT INTO websites (name, url) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Website>(&query)
            .bind(&input.name)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Website>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM websites WHERE id = $1");
        sqlx::query_as::<_, Website>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Website>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM websites ORDER BY id");
        sqlx::query_as::<_, Website>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable column. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &WebsiteInput,
    ) -> Result<Option<Website>, sqlx::Error> {
        let query = format!(
            "UPDATE websites SET name = $2, url = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Website>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a website by ID, returning the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM websites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl ReferenceLookup for WebsiteRepo {
    type Entity = Website;
    const ENTITY: &'static str = "Website";

    async fn lookup(pool: &PgPool, id: DbId) -> Result<Option<Website>, sqlx::Error> {
        Self::find_by_id(pool, id).await
    }
}
