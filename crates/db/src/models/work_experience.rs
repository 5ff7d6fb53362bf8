//! Work experience entity model and DTOs.

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

/// A raw row from the `work_experiences` table.
#[derive(Debug, Clone, FromRow)]
pub struct WorkExperienceRow {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub company_name: String,
    pub position: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub company_logo_id: Option<DbId>,
    pub company_website_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A position held at a company. `end_date` of `None` means current.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkExperience {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub company_name: String,
    pub position: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub company_logo_id: Option<DbId>,
    pub company_logo: Option<Image>,
    pub company_website_id: Option<DbId>,
    pub company_website: Option<Website>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a work experience.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkExperienceInput {
    pub company_name: String,
    pub position: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub company_logo_id: Option<DbId>,
    pub company_website_id: Option<DbId>,
}

impl WorkExperienceInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("company_name", &self.company_name)?;
        validate_name("position", &self.position)?;
        validate_optional_name("location", self.location.as_deref())?;
        validate_optional_text("description", self.description.as_deref())?;
        validate_date_range("start_date", self.start_date, "end_date", self.end_date)?;
        validate_reference("company_logo_id", self.company_logo_id)?;
        validate_reference("company_website_id", self.company_website_id)
    }
}
