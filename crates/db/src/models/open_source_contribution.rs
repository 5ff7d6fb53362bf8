//! Open-source contribution entity model and DTOs.

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

/// A raw row from the `open_source_contributions` table.
#[derive(Debug, Clone, FromRow)]
pub struct OpenSourceContributionRow {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub project_name: String,
    pub organization_name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub project_logo_id: Option<DbId>,
    pub organization_website_id: Option<DbId>,
    pub repository_website_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Work on a third-party open-source project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenSourceContribution {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub project_name: String,
    pub organization_name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub project_logo_id: Option<DbId>,
    pub project_logo: Option<Image>,
    pub organization_website_id: Option<DbId>,
    pub organization_website: Option<Website>,
    pub repository_website_id: Option<DbId>,
    pub repository_website: Option<Website>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing an open-source contribution.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenSourceContributionInput {
    pub project_name: String,
    pub organization_name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub project_logo_id: Option<DbId>,
    pub organization_website_id: Option<DbId>,
    pub repository_website_id: Option<DbId>,
}

impl OpenSourceContributionInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("project_name", &self.project_name)?;
        validate_optional_name("organization_name", self.organization_name.as_deref())?;
        validate_optional_text("description", self.description.as_deref())?;
        validate_date_range("start_date", self.start_date, "end_date", self.end_date)?;
        validate_reference("project_logo_id", self.project_logo_id)?;
        validate_reference("organization_website_id", self.organization_website_id)?;
        validate_reference("repository_website_id", self.repository_website_id)
    }
}
