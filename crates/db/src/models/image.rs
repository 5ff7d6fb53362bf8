//! Image entity model and DTOs.

use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::{validate_name, validate_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An image row from the `images` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub name: String,
    /// Storage path or public URL of the image file.
    pub path: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing an image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageInput {
    pub name: String,
    pub path: String,
}

impl ImageInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("name", &self.name)?;
        validate_text("path", &self.path)
    }
}
