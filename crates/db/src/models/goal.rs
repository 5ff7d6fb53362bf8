//! Goal entity model and DTOs.
//!
//! Goals have no nested references, so rows map straight to the model.

use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::validate_text;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A goal row from the `goals` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Goal {
    pub id: DbId,
    pub side_project_id: DbId,
    pub description: String,
    pub is_complete: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a goal.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalInput {
    pub description: String,
    /// Defaults to `false` when omitted.
    #[serde(default)]
    pub is_complete: bool,
}

impl GoalInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_text("description", &self.description)
    }
}
