//! Dependency library entity model and DTOs.

use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::{validate_name, validate_optional_text, validate_reference};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::Image;
use crate::models::website::Website;

/// A raw row from the `dependency_libraries` table.
#[derive(Debug, Clone, FromRow)]
pub struct DependencyLibraryRow {
    pub id: DbId,
    pub side_project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub logo_image_id: Option<DbId>,
    pub website_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A third-party library used by a side project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyLibrary {
    pub id: DbId,
    pub side_project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub logo_image_id: Option<DbId>,
    pub logo_image: Option<Image>,
    pub website_id: Option<DbId>,
    pub website: Option<Website>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyLibraryInput {
    pub name: String,
    pub description: Option<String>,
    pub logo_image_id: Option<DbId>,
    pub website_id: Option<DbId>,
}

impl DependencyLibraryInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("name", &self.name)?;
        validate_optional_text("description", self.description.as_deref())?;
        validate_reference("logo_image_id", self.logo_image_id)?;
        validate_reference("website_id", self.website_id)
    }
}
