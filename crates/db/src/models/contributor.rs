//! Contributor entity model and DTOs.

use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::{
    validate_name, validate_optional_email, validate_optional_text, validate_reference,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::Image;
use crate::models::website::Website;

/// A raw row from the `contributors` table.
#[derive(Debug, Clone, FromRow)]
pub struct ContributorRow {
    pub id: DbId,
    pub side_project_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub contribution_details: Option<String>,
    pub headshot_id: Option<DbId>,
    pub linkedin_website_id: Option<DbId>,
    pub github_website_id: Option<DbId>,
    pub portfolio_website_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Someone who worked on a side project, with headshot and profile links resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contributor {
    pub id: DbId,
    pub side_project_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub contribution_details: Option<String>,
    pub headshot_id: Option<DbId>,
    pub headshot: Option<Image>,
    pub linkedin_website_id: Option<DbId>,
    pub linkedin_website: Option<Website>,
    pub github_website_id: Option<DbId>,
    pub github_website: Option<Website>,
    pub portfolio_website_id: Option<DbId>,
    pub portfolio_website: Option<Website>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a contributor.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributorInput {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub contribution_details: Option<String>,
    pub headshot_id: Option<DbId>,
    pub linkedin_website_id: Option<DbId>,
    pub github_website_id: Option<DbId>,
    pub portfolio_website_id: Option<DbId>,
}

impl ContributorInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("first_name", &self.first_name)?;
        validate_name("last_name", &self.last_name)?;
        validate_optional_email("email", self.email.as_deref())?;
        validate_optional_text("bio", self.bio.as_deref())?;
        validate_optional_text("contribution_details", self.contribution_details.as_deref())?;
        validate_reference("headshot_id", self.headshot_id)?;
        validate_reference("linkedin_website_id", self.linkedin_website_id)?;
        validate_reference("github_website_id", self.github_website_id)?;
        validate_reference("portfolio_website_id", self.portfolio_website_id)
    }
}
