//! Website entity model and DTOs.

use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::{validate_name, validate_url};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A website row from the `websites` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Website {
    pub id: DbId,
    pub name: String,
    pub url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a website.
#[derive(Debug, Clone, Deserialize)]
pub struct WebsiteInput {
    pub name: String,
    pub url: String,
}

impl WebsiteInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("name", &self.name)?;
        validate_url("url", &self.url)
    }
}
