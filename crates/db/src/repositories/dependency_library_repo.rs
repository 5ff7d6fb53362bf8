//! Repository for the `dependency_libraries` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::dependency_library::{
    DependencyLibrary, DependencyLibraryInput, DependencyLibraryRow,
};
use crate::references::{resolve_all, resolve_optional, resolve_reference, ResolveReferences};
use crate::repositories::{ImageRepo, WebsiteRepo};

const COLUMNS: &str = "id, side_project_id, name, description, logo_image_id, website_id, \
    created_at, updated_at";

/// Provides CRUD operations for dependency libraries, scoped by side project.
pub struct DependencyLibraryRepo;

impl DependencyLibraryRepo {
    pub async fn create(
        pool: &PgPool,
        side_project_id: DbId,
        input: &DependencyLibraryInput,
    ) -> Result<DependencyLibrary, sqlx::Error> {
        let query = format!(
            "INSERT INTO dependency_libraries
                (side_project_id, name, description, logo_image_id, website_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DependencyLibraryRow>(&query)
            .bind(side_project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.logo_image_id)
            .bind(input.website_id)
            .fetch_one(pool)
            .await?;
        row.resolve(pool).await
    }

    pub async fn find_in_side_project(
        pool: &PgPool,
        side_project_id: DbId,
        id: DbId,
    ) -> Result<Option<DependencyLibrary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dependency_libraries WHERE id = $1 AND side_project_id = $2"
        );
        let row = sqlx::query_as::<_, DependencyLibraryRow>(&query)
            .bind(id)
            .bind(side_project_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn list_by_side_project(
        pool: &PgPool,
        side_project_id: DbId,
    ) -> Result<Vec<DependencyLibrary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dependency_libraries WHERE side_project_id = $1 ORDER BY id"
        );
        let rows = sqlx::query_as::<_, DependencyLibraryRow>(&query)
            .bind(side_project_id)
            .fetch_all(pool)
            .await?;
        resolve_all(pool, rows).await
    }

    pub async fn update(
        pool: &PgPool,
        side_project_id: DbId,
        id: DbId,
        input: &DependencyLibraryInput,
    ) -> Result<Option<DependencyLibrary>, sqlx::Error> {
        let query = format!(
            "UPDATE dependency_libraries SET
                name = $3,
                description = $4,
                logo_image_id = $5,
                website_id = $6
             WHERE id = $1 AND side_project_id = $2
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DependencyLibraryRow>(&query)
            .bind(id)
            .bind(side_project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.logo_image_id)
            .bind(input.website_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn delete(
        pool: &PgPool,
        side_project_id: DbId,
        id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM dependency_libraries WHERE id = $1 AND side_project_id = $2",
        )
        .bind(id)
        .bind(side_project_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

impl ResolveReferences for DependencyLibraryRow {
    type Output = DependencyLibrary;

    async fn resolve(self, pool: &PgPool) -> Result<DependencyLibrary, sqlx::Error> {
        let logo_image = resolve_reference::<ImageRepo>(pool, self.logo_image_id).await?;
        let website = resolve_reference::<WebsiteRepo>(pool, self.website_id).await?;

        Ok(DependencyLibrary {
            id: self.id,
            side_project_id: self.side_project_id,
            name: self.name,
            description: self.description,
            logo_image_id: self.logo_image_id,
            logo_image,
            website_id: self.website_id,
            website,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
