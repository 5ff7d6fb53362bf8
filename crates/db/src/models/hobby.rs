//! Hobby entity model and DTOs.

use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::{validate_reference, validate_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::Image;

/// A raw row from the `hobbies` table.
#[derive(Debug, Clone, FromRow)]
pub struct HobbyRow {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub description: String,
    pub image_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hobby {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub description: String,
    pub image_id: Option<DbId>,
    pub image: Option<Image>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a hobby.
#[derive(Debug, Clone, Deserialize)]
pub struct HobbyInput {
    pub description: String,
    pub image_id: Option<DbId>,
}

impl HobbyInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_text("description", &self.description)?;
        validate_reference("image_id", self.image_id)
    }
}
