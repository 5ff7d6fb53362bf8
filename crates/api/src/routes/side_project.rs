//! Route definitions for collections scoped to a side project.
//!
//! Side projects themselves are created under
//! `/portfolios/{portfolio_id}/side-projects`; their children are addressed
//! directly by side project id.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::skill_association::{self, SideProjectSkills};
use crate::handlers::{api_service, contributor, dependency_library, goal};
use crate::state::AppState;

/// Routes mounted at `/side-projects`.
///
/// ```text
/// GET    /{side_project_id}/contributors                -> list_by_side_project
/// POST   /{side_project_id}/contributors                -> create
/// GET    /{side_project_id}/contributors/{id}           -> get_by_id
/// PUT    /{side_project_id}/contributors/{id}           -> update
/// DELETE /{side_project_id}/contributors/{id}           -> delete
///
/// (same five routes for api-services, dependency-libraries, goals)
///
/// GET    /{side_project_id}/skills                      -> list
/// POST   /{side_project_id}/skills                      -> create_and_attach
/// PUT    /{side_project_id}/skills/{skill_id}           -> attach
/// DELETE /{side_project_id}/skills/{skill_id}           -> detach
/// ```
pub fn router() -> Router<AppState> {
    let contributor_routes = Router::new()
        .route(
            "/",
            get(contributor::list_by_side_project).post(contributor::create),
        )
        .route(
            "/{id}",
            get(contributor::get_by_id)
                .put(contributor::update)
                .delete(contributor::delete),
        );

    let api_service_routes = Router::new()
        .route(
            "/",
            get(api_service::list_by_side_project).post(api_service::create),
        )
        .route(
            "/{id}",
            get(api_service::get_by_id)
                .put(api_service::update)
                .delete(api_service::delete),
        );

    let dependency_library_routes = Router::new()
        .route(
            "/",
            get(dependency_library::list_by_side_project).post(dependency_library::create),
        )
        .route(
            "/{id}",
            get(dependency_library::get_by_id)
                .put(dependency_library::update)
                .delete(dependency_library::delete),
        );

    let goal_routes = Router::new()
        .route("/", get(goal::list_by_side_project).post(goal::create))
        .route(
            "/{id}",
            get(goal::get_by_id).put(goal::update).delete(goal::delete),
        );

    Router::new()
        .nest("/{side_project_id}/contributors", contributor_routes)
        .nest("/{side_project_id}/api-services", api_service_routes)
        .nest(
            "/{side_project_id}/dependency-libraries",
            dependency_library_routes,
        )
        .nest("/{side_project_id}/goals", goal_routes)
        .route(
            "/{side_project_id}/skills",
            get(skill_association::list::<SideProjectSkills>)
                .post(skill_association::create_and_attach::<SideProjectSkills>),
        )
        .route(
            "/{side_project_id}/skills/{skill_id}",
            put(skill_association::attach::<SideProjectSkills>)
                .delete(skill_association::detach::<SideProjectSkills>),
        )
}
