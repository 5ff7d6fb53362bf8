//! Repository for the `goals` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::goal::{Goal, GoalInput};

const COLUMNS: &str = "id, side_project_id, description, is_complete, created_at, updated_at";

/// Provides CRUD operations for side project goals.
pub struct GoalRepo;

impl GoalRepo {
    pub async fn create(
        pool: &PgPool,
        side_project_id: DbId,
        input: &GoalInput,
    ) -> Result<Goal, sqlx::Error> {
        let query = format!(
            "INSERT INTO goals (side_project_id, description, is_complete)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(side_project_id)
            .bind(&input.description)
            .bind(input.is_complete)
            .fetch_one(pool)
            .await
    }

    pub async fn find_in_side_project(
        pool: &PgPool,
        side_project_id: DbId,
        id: DbId,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE id = $1 AND side_project_id = $2");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(side_project_id)
            .fetch_optional(pool)
            .await
    }

    /// Goals for a side project, oldest first.
    pub async fn list_by_side_project(
        pool: &PgPool,
        side_project_id: DbId,
    ) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE side_project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Goal>(&query)
            .bind(side_project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        side_project_id: DbId,
        id: DbId,
        input: &GoalInput,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!(
            "UPDATE goals SET description = $3, is_complete = $4
             WHERE id = $1 AND side_project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(side_project_id)
            .bind(&input.description)
            .bind(input.is_complete)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(
        pool: &PgPool,
        side_project_id: DbId,
        id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND side_project_id = $2")
            .bind(id)
            .bind(side_project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
