//! Portfolio entity model, DTOs, and the assembled detail view.

use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_core::validation::{
    validate_name, validate_optional_email, validate_optional_name, validate_optional_text,
    validate_reference,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::achievement::Achievement;
use crate::models::api_service::ApiService;
use crate::models::contributor::Contributor;
use crate::models::credential::Credential;
use crate::models::dependency_library::DependencyLibrary;
use crate::models::education::Education;
use crate::models::goal::Goal;
use crate::models::hobby::Hobby;
use crate::models::image::Image;
use crate::models::open_source_contribution::OpenSourceContribution;
use crate::models::side_project::SideProject;
use crate::models::skill::Skill;
use crate::models::volunteer_work::VolunteerWork;
use crate::models::website::Website;
use crate::models::work_experience::WorkExperience;

/// A raw row from the `portfolios` table, references unresolved.
#[derive(Debug, Clone, FromRow)]
pub struct PortfolioRow {
    pub id: DbId,
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub profile_image_id: Option<DbId>,
    pub github_website_id: Option<DbId>,
    pub linkedin_website_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A portfolio with its image and website references resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portfolio {
    pub id: DbId,
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub profile_image_id: Option<DbId>,
    pub profile_image: Option<Image>,
    pub github_website_id: Option<DbId>,
    pub github_website: Option<Website>,
    pub linkedin_website_id: Option<DbId>,
    pub linkedin_website: Option<Website>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a portfolio.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioInput {
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub profile_image_id: Option<DbId>,
    pub github_website_id: Option<DbId>,
    pub linkedin_website_id: Option<DbId>,
}

impl PortfolioInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("name", &self.name)?;
        validate_optional_name("tagline", self.tagline.as_deref())?;
        validate_optional_text("description", self.description.as_deref())?;
        validate_optional_name("location", self.location.as_deref())?;
        validate_optional_email("email", self.email.as_deref())?;
        validate_reference("profile_image_id", self.profile_image_id)?;
        validate_reference("github_website_id", self.github_website_id)?;
        validate_reference("linkedin_website_id", self.linkedin_website_id)
    }
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// A side project together with everything scoped to it.
#[derive(Debug, Clone, Serialize)]
pub struct SideProjectDetail {
    #[serde(flatten)]
    pub side_project: SideProject,
    pub goals: Vec<Goal>,
    pub contributors: Vec<Contributor>,
    pub api_services: Vec<ApiService>,
    pub dependency_libraries: Vec<DependencyLibrary>,
    pub skills: Vec<Skill>,
}

/// Any achievement owner paired with its achievements.
#[derive(Debug, Clone, Serialize)]
pub struct WithAchievements<T> {
    #[serde(flatten)]
    pub item: T,
    pub achievements: Vec<Achievement>,
}

/// A portfolio with every child collection resolved.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioDetail {
    #[serde(flatten)]
    pub portfolio: Portfolio,
    pub skills: Vec<Skill>,
    pub side_projects: Vec<SideProjectDetail>,
    pub work_experiences: Vec<WithAchievements<WorkExperience>>,
    pub educations: Vec<WithAchievements<Education>>,
    pub volunteer_works: Vec<WithAchievements<VolunteerWork>>,
    pub open_source_contributions: Vec<WithAchievements<OpenSourceContribution>>,
    pub credentials: Vec<Credential>,
    pub hobbies: Vec<Hobby>,
}
