//! Credential (certification, license) entity model and DTOs.

use folio_core::error::CoreError;
use folio_core::types::{Date, DbId, Timestamp};
use folio_core::validation::{
    validate_date_range, validate_name, validate_optional_name, validate_optional_text,
    validate_reference,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::Image;
use crate::models::website::Website;

/// A raw row from the `credentials` table.
#[derive(Debug, Clone, FromRow)]
pub struct CredentialRow {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub name: String,
    pub issuing_body: String,
    pub description: Option<String>,
    pub credential_number: Option<String>,
    pub issue_date: Option<Date>,
    pub expiration_date: Option<Date>,
    pub organization_logo_id: Option<DbId>,
    pub organization_website_id: Option<DbId>,
    pub credential_website_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A credential with the issuing organization's logo and both websites resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credential {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub name: String,
    pub issuing_body: String,
    pub description: Option<String>,
    pub credential_number: Option<String>,
    pub issue_date: Option<Date>,
    pub expiration_date: Option<Date>,
    pub organization_logo_id: Option<DbId>,
    pub organization_logo: Option<Image>,
    pub organization_website_id: Option<DbId>,
    pub organization_website: Option<Website>,
    /// Verification page for this specific credential.
    pub credential_website_id: Option<DbId>,
    pub credential_website: Option<Website>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a credential.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialInput {
    pub name: String,
    pub issuing_body: String,
    pub description: Option<String>,
    pub credential_number: Option<String>,
    pub issue_date: Option<Date>,
    pub expiration_date: Option<Date>,
    pub organization_logo_id: Option<DbId>,
    pub organization_website_id: Option<DbId>,
    pub credential_website_id: Option<DbId>,
}

impl CredentialInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("name", &self.name)?;
        validate_name("issuing_body", &self.issuing_body)?;
        validate_optional_text("description", self.description.as_deref())?;
        validate_optional_name("credential_number", self.credential_number.as_deref())?;
        validate_date_range(
            "issue_date",
            self.issue_date,
            "expiration_date",
            self.expiration_date,
        )?;
        validate_reference("organization_logo_id", self.organization_logo_id)?;
        validate_reference("organization_website_id", self.organization_website_id)?;
        validate_reference("credential_website_id", self.credential_website_id)
    }
}
