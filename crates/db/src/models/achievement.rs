//! Achievement entity model, DTOs, and owner addressing.

use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::{validate_reference, validate_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::Image;

/// The record an achievement hangs off. Exactly one per achievement
/// (`ck_achievements_single_owner`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementOwner {
    WorkExperience(DbId),
    Education(DbId),
    VolunteerWork(DbId),
    OpenSourceContribution(DbId),
}

impl AchievementOwner {
    /// Column in `achievements` referencing this owner.
    pub fn column(self) -> &'static str {
        match self {
            AchievementOwner::WorkExperience(_) => "work_experience_id",
            AchievementOwner::Education(_) => "education_id",
            AchievementOwner::VolunteerWork(_) => "volunteer_work_id",
            AchievementOwner::OpenSourceContribution(_) => "open_source_contribution_id",
        }
    }

    /// Table holding the owner row.
    pub fn table(self) -> &'static str {
        match self {
            AchievementOwner::WorkExperience(_) => "work_experiences",
            AchievementOwner::Education(_) => "educations",
            AchievementOwner::VolunteerWork(_) => "volunteer_works",
            AchievementOwner::OpenSourceContribution(_) => "open_source_contributions",
        }
    }

    pub fn id(self) -> DbId {
        match self {
            AchievementOwner::WorkExperience(id)
            | AchievementOwner::Education(id)
            | AchievementOwner::VolunteerWork(id)
            | AchievementOwner::OpenSourceContribution(id) => id,
        }
    }

    /// Owner entity name, as reported in not-found errors.
    pub fn entity(self) -> &'static str {
        match self {
            AchievementOwner::WorkExperience(_) => "WorkExperience",
            AchievementOwner::Education(_) => "Education",
            AchievementOwner::VolunteerWork(_) => "VolunteerWork",
            AchievementOwner::OpenSourceContribution(_) => "OpenSourceContribution",
        }
    }
}

/// A raw row from the `achievements` table.
#[derive(Debug, Clone, FromRow)]
pub struct AchievementRow {
    pub id: DbId,
    pub work_experience_id: Option<DbId>,
    pub education_id: Option<DbId>,
    pub volunteer_work_id: Option<DbId>,
    pub open_source_contribution_id: Option<DbId>,
    pub description: String,
    pub icon_image_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub work_experience_id: Option<DbId>,
    pub education_id: Option<DbId>,
    pub volunteer_work_id: Option<DbId>,
    pub open_source_contribution_id: Option<DbId>,
    pub description: String,
    pub icon_image_id: Option<DbId>,
    pub icon_image: Option<Image>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing an achievement. The owner comes from
/// the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct AchievementInput {
    pub description: String,
    pub icon_image_id: Option<DbId>,
}

impl AchievementInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_text("description", &self.description)?;
        validate_reference("icon_image_id", self.icon_image_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_columns_are_distinct() {
        let owners = [
            AchievementOwner::WorkExperience(1),
            AchievementOwner::Education(1),
            AchievementOwner::VolunteerWork(1),
            AchievementOwner::OpenSourceContribution(1),
        ];
        let mut columns: Vec<_> = owners.iter().map(|o| o.column()).collect();
        columns.sort_unstable();
        columns.dedup();
        assert_eq!(columns.len(), owners.len());
    }
}
