//! HTTP handlers, one module per resource.
//!
//! Reads are public. Every mutating handler takes an
//! [`AuthUser`](crate::middleware::auth::AuthUser), validates its input before
//! touching the database, and checks that the parent in the path exists so a
//! missing parent is reported as 404 rather than a foreign-key failure.

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
pub mod skill_association;
pub mod volunteer_work;
pub mod website;
pub mod work_experience;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::repositories::{PortfolioRepo, SideProjectRepo};
use folio_db::DbPool;

use crate::error::{AppError, AppResult};

/// Fail with 404 unless the portfolio exists.
pub(crate) async fn ensure_portfolio_exists(pool: &DbPool, portfolio_id: DbId) -> AppResult<()> {
    if PortfolioRepo::exists(pool, portfolio_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Portfolio",
            id: portfolio_id,
        }))
    }
}

/// Fail with 404 unless the side project exists.
pub(crate) async fn ensure_side_project_exists(
    pool: &DbPool,
    side_project_id: DbId,
) -> AppResult<()> {
    if SideProjectRepo::exists(pool, side_project_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SideProject",
            id: side_project_id,
        }))
    }
}
