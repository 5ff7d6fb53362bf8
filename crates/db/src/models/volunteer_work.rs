//! Volunteer work entity model and DTOs.

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

/// A raw row from the `volunteer_works` table.
#[derive(Debug, Clone, FromRow)]
pub struct VolunteerWorkRow {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub organization_name: String,
    pub position: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub organization_logo_id: Option<DbId>,
    pub organization_website_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolunteerWork {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub organization_name: String,
    pub position: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub organization_logo_id: Option<DbId>,
    pub organization_logo: Option<Image>,
    pub organization_website_id: Option<DbId>,
    pub organization_website: Option<Website>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolunteerWorkInput {
    pub organization_name: String,
    pub position: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub organization_logo_id: Option<DbId>,
    pub organization_website_id: Option<DbId>,
}

impl VolunteerWorkInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("organization_name", &self.organization_name)?;
        validate_optional_name("position", self.position.as_deref())?;
        validate_optional_name("location", self.location.as_deref())?;
        validate_optional_text("description", self.description.as_deref())?;
        validate_date_range("start_date", self.start_date, "end_date", self.end_date)?;
        validate_reference("organization_logo_id", self.organization_logo_id)?;
        validate_reference("organization_website_id", self.organization_website_id)
    }
}
