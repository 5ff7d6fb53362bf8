//! Side project entity model and DTOs.

use folio_core::error::CoreError;
use folio_core::types::{Date, DbId, Timestamp};
use folio_core::validation::{
    validate_date_range, validate_name, validate_optional_text, validate_reference,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::Image;
use crate::models::website::Website;

/// A raw row from the `side_projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct SideProjectRow {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub finish_date: Option<Date>,
    pub logo_image_id: Option<DbId>,
    pub website_id: Option<DbId>,
    pub repository_website_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A side project with logo and website references resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideProject {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub finish_date: Option<Date>,
    pub logo_image_id: Option<DbId>,
    pub logo_image: Option<Image>,
    pub website_id: Option<DbId>,
    pub website: Option<Website>,
    pub repository_website_id: Option<DbId>,
    pub repository_website: Option<Website>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a side project.
///
/// The owning portfolio comes from the request path, not the body.
#[derive(Debug, Clone, Deserialize)]
pub struct SideProjectInput {
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub finish_date: Option<Date>,
    pub logo_image_id: Option<DbId>,
    pub website_id: Option<DbId>,
    pub repository_website_id: Option<DbId>,
}

impl SideProjectInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("name", &self.name)?;
        validate_optional_text("description", self.description.as_deref())?;
        validate_date_range(
            "start_date",
            self.start_date,
            "finish_date",
            self.finish_date,
        )?;
        validate_reference("logo_image_id", self.logo_image_id)?;
        validate_reference("website_id", self.website_id)?;
        validate_reference("repository_website_id", self.repository_website_id)
    }
}
