//! Repository for the `images` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::image::{Image, ImageInput};
use crate::references::ReferenceLookup;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, path, created_at, updated_at";

/// Provides CRUD operations for images.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image, returning the created row.
    pub async fn create(pool: &PgPool, input: &ImageInput) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (name, path) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(&input.name)
            .bind(&input.path)
            .fetch_one(pool)
            .await
    }

    /// Find an image by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all images ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images ORDER BY id");
        sqlx::query_as::<_, Image>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable column. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ImageInput,
    ) -> Result<Option<Image>, sqlx::Error> {
        let query = format!(
            "UPDATE images SET name = $2, path = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.path)
            .fetch_optional(pool)
            .await
    }

    /// Delete an image by ID, returning the number of rows removed.
    ///
    /// Referencing rows keep existing; their image column is cleared by
    /// `ON DELETE SET NULL`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl ReferenceLookup for ImageRepo {
    type Entity = Image;
    const ENTITY: &'static str = "Image";

    async fn lookup(pool: &PgPool, id: DbId) -> Result<Option<Image>, sqlx::Error> {
        Self::find_by_id(pool, id).await
    }
}
