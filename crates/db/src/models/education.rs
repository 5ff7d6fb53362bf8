//! Education entity model and DTOs.

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

/// A raw row from the `educations` table.
#[derive(Debug, Clone, FromRow)]
pub struct EducationRow {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub institution_name: String,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub graduation_date: Option<Date>,
    pub institution_logo_id: Option<DbId>,
    pub institution_website_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Education {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub institution_name: String,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub graduation_date: Option<Date>,
    pub institution_logo_id: Option<DbId>,
    pub institution_logo: Option<Image>,
    pub institution_website_id: Option<DbId>,
    pub institution_website: Option<Website>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing an education entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EducationInput {
    pub institution_name: String,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub graduation_date: Option<Date>,
    pub institution_logo_id: Option<DbId>,
    pub institution_website_id: Option<DbId>,
}

impl EducationInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("institution_name", &self.institution_name)?;
        validate_optional_name("degree", self.degree.as_deref())?;
        validate_optional_name("field_of_study", self.field_of_study.as_deref())?;
        validate_optional_name("location", self.location.as_deref())?;
        validate_optional_text("description", self.description.as_deref())?;
        validate_date_range(
            "start_date",
            self.start_date,
            "graduation_date",
            self.graduation_date,
        )?;
        validate_reference("institution_logo_id", self.institution_logo_id)?;
        validate_reference("institution_website_id", self.institution_website_id)
    }
}
