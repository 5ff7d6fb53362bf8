//! Skill entity model, DTOs, and association owners.

use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::validate_name;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A skill row from the `skills` table. Names are unique (`uq_skills_name`).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or renaming a skill, and for create-and-attach requests.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillInput {
    pub name: String,
}

impl SkillInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("name", &self.name)
    }
}

/// The entity a skill is associated with through a join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillOwner {
    Portfolio(DbId),
    SideProject(DbId),
}

impl SkillOwner {
    /// Join table holding the association.
    pub fn join_table(self) -> &'static str {
        match self {
            SkillOwner::Portfolio(_) => "portfolio_skills",
            SkillOwner::SideProject(_) => "side_project_skills",
        }
    }

    /// Table holding the owner row.
    pub fn table(self) -> &'static str {
        match self {
            SkillOwner::Portfolio(_) => "portfolios",
            SkillOwner::SideProject(_) => "side_projects",
        }
    }

    /// Join-table column referencing the owner.
    pub fn owner_column(self) -> &'static str {
        match self {
            SkillOwner::Portfolio(_) => "portfolio_id",
            SkillOwner::SideProject(_) => "side_project_id",
        }
    }

    pub fn id(self) -> DbId {
        match self {
            SkillOwner::Portfolio(id) | SkillOwner::SideProject(id) => id,
        }
    }

    /// Owner entity name, as reported in not-found errors.
    pub fn entity(self) -> &'static str {
        match self {
            SkillOwner::Portfolio(_) => "Portfolio",
            SkillOwner::SideProject(_) => "SideProject",
        }
    }
}
