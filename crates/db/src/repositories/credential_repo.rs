//! Repository for the `credentials` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::credential::{Credential, CredentialInput, CredentialRow};
use crate::references::{resolve_all, resolve_optional, resolve_reference, ResolveReferences};
use crate::repositories::{ImageRepo, WebsiteRepo};

const COLUMNS: &str = "id, portfolio_id, name, issuing_body, description, credential_number, \
    issue_date, expiration_date, organization_logo_id, organization_website_id, \
    credential_website_id, created_at, updated_at";

/// Provides CRUD operations for credentials, scoped by portfolio.
pub struct CredentialRepo;

impl CredentialRepo {
    pub async fn create(
        pool: &PgPool,
        portfolio_id: DbId,
        input: &CredentialInput,
    ) -> Result<Credential, sqlx::Error> {
        let query = format!(
            "INSERT INTO credentials
                (portfolio_id, name, issuing_body, description, credential_number,
                 issue_date, expiration_date, organization_logo_id,
                 organization_website_id, credential_website_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CredentialRow>(&query)
            .bind(portfolio_id)
            .bind(&input.name)
            .bind(&input.issuing_body)
            .bind(&input.description)
            .bind(&input.credential_number)
            .bind(input.issue_date)
            .bind(input.expiration_date)
            .bind(input.organization_logo_id)
            .bind(input.organization_website_id)
            .bind(input.credential_website_id)
            .fetch_one(pool)
            .await?;
        row.resolve(pool).await
    }

    pub async fn find_in_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
    ) -> Result<Option<Credential>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM credentials WHERE id = $1 AND portfolio_id = $2");
        let row = sqlx::query_as::<_, CredentialRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn list_by_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Vec<Credential>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM credentials WHERE portfolio_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, CredentialRow>(&query)
            .bind(portfolio_id)
            .fetch_all(pool)
            .await?;
        resolve_all(pool, rows).await
    }

    pub async fn update(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
        input: &CredentialInput,
    ) -> Result<Option<Credential>, sqlx::Error> {
        let query = format!(
            "UPDATE credentials SET
                name = $3,
                issuing_body = $4,
                description = $5,
                credential_number = $6,
                issue_date = $7,
                expiration_date = $8,
                organization_logo_id = $9,
                organization_website_id = $10,
                credential_website_id = $11
             WHERE id = $1 AND portfolio_id = $2
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CredentialRow>(&query)
            .bind(id)
            .bind(portfolio_id)
            .bind(&input.name)
            .bind(&input.issuing_body)
            .bind(&input.description)
            .bind(&input.credential_number)
            .bind(input.issue_date)
            .bind(input.expiration_date)
            .bind(input.organization_logo_id)
            .bind(input.organization_website_id)
            .bind(input.credential_website_id)
            .fetch_optional(pool)
            .await?;
        resolve_optional(pool, row).await
    }

    pub async fn delete(pool: &PgPool, portfolio_id: DbId, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM credentials WHERE id = $1 AND portfolio_id = $2")
            .bind(id)
            .bind(portfolio_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl ResolveReferences for CredentialRow {
    type Output = Credential;

    async fn resolve(self, pool: &PgPool) -> Result<Credential, sqlx::Error> {
        let organization_logo =
            resolve_reference::<ImageRepo>(pool, self.organization_logo_id).await?;
        let organization_website =
            resolve_reference::<WebsiteRepo>(pool, self.organization_website_id).await?;
        let credential_website =
            resolve_reference::<WebsiteRepo>(pool, self.credential_website_id).await?;

        Ok(Credential {
            id: self.id,
            portfolio_id: self.portfolio_id,
            name: self.name,
            issuing_body: self.issuing_body,
            description: self.description,
            credential_number: self.credential_number,
            issue_date: self.issue_date,
            expiration_date: self.expiration_date,
            organization_logo_id: self.organization_logo_id,
            organization_logo,
            organization_website_id: self.organization_website_id,
            organization_website,
            credential_website_id: self.credential_website_id,
            credential_website,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
