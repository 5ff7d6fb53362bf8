//! Route definitions for the `/portfolios` resource.
//!
//! Also nests every portfolio-scoped collection under
//! `/portfolios/{portfolio_id}/...`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::skill_association::{self, PortfolioSkills};
use crate::handlers::{
    credential, education, hobby, open_source_contribution, portfolio, side_project,
    volunteer_work, work_experience,
};
use crate::state::AppState;

/// Routes mounted at `/portfolios`.
///
/// Every route names its first segment `{portfolio_id}`; the router requires
/// one parameter name per position.
///
/// ```text
/// GET    /                                               -> list
/// POST   /                                               -> create
/// GET    /{portfolio_id}                                 -> get_by_id
/// PUT    /{portfolio_id}                                 -> update
/// DELETE /{portfolio_id}                                 -> delete
/// GET    /{portfolio_id}/detail                          -> get_detail
///
/// GET    /{portfolio_id}/skills                          -> list
/// POST   /{portfolio_id}/skills                          -> create_and_attach
/// PUT    /{portfolio_id}/skills/{skill_id}               -> attach
/// DELETE /{portfolio_id}/skills/{skill_id}               -> detach
///
/// GET    /{portfolio_id}/side-projects                   -> list_by_portfolio
/// POST   /{portfolio_id}/side-projects                   -> create
/// GET    /{portfolio_id}/side-projects/{id}              -> get_by_id
/// PUT    /{portfolio_id}/side-projects/{id}              -> update
/// DELETE /{portfolio_id}/side-projects/{id}              -> delete
///
/// (same five routes for work-experiences, educations, credentials,
///  hobbies, volunteer-works, open-source-contributions)
/// ```
pub fn router() -> Router<AppState> {
    let side_project_routes = Router::new()
        .route(
            "/",
            get(side_project::list_by_portfolio).post(side_project::create),
        )
        .route(
            "/{id}",
            get(side_project::get_by_id)
                .put(side_project::update)
                .delete(side_project::delete),
        );

    let work_experience_routes = Router::new()
        .route(
            "/",
            get(work_experience::list_by_portfolio).post(work_experience::create),
        )
        .route(
            "/{id}",
            get(work_experience::get_by_id)
                .put(work_experience::update)
                .delete(work_experience::delete),
        );

    let education_routes = Router::new()
        .route(
            "/",
            get(education::list_by_portfolio).post(education::create),
        )
        .route(
            "/{id}",
            get(education::get_by_id)
                .put(education::update)
                .delete(education::delete),
        );

    let credential_routes = Router::new()
        .route(
            "/",
            get(credential::list_by_portfolio).post(credential::create),
        )
        .route(
            "/{id}",
            get(credential::get_by_id)
                .put(credential::update)
                .delete(credential::delete),
        );

    let hobby_routes = Router::new()
        .route("/", get(hobby::list_by_portfolio).post(hobby::create))
        .route(
            "/{id}",
            get(hobby::get_by_id)
                .put(hobby::update)
                .delete(hobby::delete),
        );

    let volunteer_work_routes = Router::new()
        .route(
            "/",
            get(volunteer_work::list_by_portfolio).post(volunteer_work::create),
        )
        .route(
            "/{id}",
            get(volunteer_work::get_by_id)
                .put(volunteer_work::update)
                .delete(volunteer_work::delete),
        );

    let open_source_routes = Router::new()
        .route(
            "/",
            get(open_source_contribution::list_by_portfolio)
                .post(open_source_contribution::create),
        )
        .route(
            "/{id}",
            get(open_source_contribution::get_by_id)
                .put(open_source_contribution::update)
                .delete(open_source_contribution::delete),
        );

    Router::new()
        .route("/", get(portfolio::list).post(portfolio::create))
        .route(
            "/{portfolio_id}",
            get(portfolio::get_by_id)
                .put(portfolio::update)
                .delete(portfolio::delete),
        )
        .route("/{portfolio_id}/detail", get(portfolio::get_detail))
        .route(
            "/{portfolio_id}/skills",
            get(skill_association::list::<PortfolioSkills>)
                .post(skill_association::create_and_attach::<PortfolioSkills>),
        )
        .route(
            "/{portfolio_id}/skills/{skill_id}",
            put(skill_association::attach::<PortfolioSkills>)
                .delete(skill_association::detach::<PortfolioSkills>),
        )
        .nest("/{portfolio_id}/side-projects", side_project_routes)
        .nest("/{portfolio_id}/work-experiences", work_experience_routes)
        .nest("/{portfolio_id}/educations", education_routes)
        .nest("/{portfolio_id}/credentials", credential_routes)
        .nest("/{portfolio_id}/hobbies", hobby_routes)
        .nest("/{portfolio_id}/volunteer-works", volunteer_work_routes)
        .nest("/{portfolio_id}/open-source-contributions", open_source_routes)
}
