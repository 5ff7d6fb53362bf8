//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Repositories for entities
//! with nested references return fully resolved models.

pub mod achievement_repo;
pub mod api_service_repo;
pub mod contributor_repo;
pub mod credential_repo;
pub mod dependency_library_repo;
pub mod education_repo;
pub mod goal_repo;
pub mod hobby_repo;
pub mod image_repo;
pub mod open_source_contribution_repo;
pub mod portfolio_repo;
pub mod side_project_repo;
pub mod skill_repo;
pub mod volunteer_work_repo;
pub mod website_repo;
pub mod work_experience_repo;

pub use achievement_repo::AchievementRepo;
pub use api_service_repo::ApiServiceRepo;
pub use contributor_repo::ContributorRepo;
pub use credential_repo::CredentialRepo;
pub use dependency_library_repo::DependencyLibraryRepo;
pub use education_repo::EducationRepo;
pub use goal_repo::GoalRepo;
pub use hobby_repo::HobbyRepo;
pub use image_repo::ImageRepo;
pub use open_source_contribution_repo::OpenSourceContributionRepo;
pub use portfolio_repo::PortfolioRepo;
pub use side_project_repo::SideProjectRepo;
pub use skill_repo::SkillRepo;
pub use volunteer_work_repo::VolunteerWorkRepo;
pub use website_repo::WebsiteRepo;
pub use work_experience_repo::WorkExperienceRepo;
