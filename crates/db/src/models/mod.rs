//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct matching the table (`*Row`) when the entity has
//!   nested references, plus the resolved `Serialize` model
//! - A `Deserialize` input DTO (`*Input`) used for both inserts and full-row
//!   updates, with a `validate` method

pub mod achievement;
pub mod api_service;
pub mod contributor;
pub mod credential;
pub mod dependency_library;
pub mod education;
pub mod goal;
pub mod hobby;
pub mod image;
pub mod open_source_contribution;
pub mod portfolio;
pub mod side_project;
pub mod skill;
pub mod volunteer_work;
pub mod website;
pub mod work_experience;
