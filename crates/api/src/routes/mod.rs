pub mod achievement;
pub mod health;
pub mod image;
pub mod portfolio;
pub mod side_project;
pub mod skill;
pub mod website;

use axum::Router;

use crate::handlers::achievement::{
    EducationOwner, OpenSourceContributionOwner, VolunteerWorkOwner, WorkExperienceOwner,
};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /images                                          list, create
/// /images/{id}                                     get, update, delete
/// /websites                                        list, create
/// /websites/{id}                                   get, update, delete
/// /skills                                          list, create
/// /skills/{id}                                     get, update, delete
///
/// /portfolios                                      list, create
/// /portfolios/{id}                                 get, update, delete
/// /portfolios/{id}/detail                          full portfolio (GET)
/// /portfolios/{id}/skills                          list, create-and-attach
/// /portfolios/{id}/skills/{skill_id}               attach (PUT), detach (DELETE)
/// /portfolios/{id}/side-projects[/{id}]            scoped CRUD
/// /portfolios/{id}/work-experiences[/{id}]         scoped CRUD
/// /portfolios/{id}/educations[/{id}]               scoped CRUD
/// /portfolios/{id}/credentials[/{id}]              scoped CRUD
/// /portfolios/{id}/hobbies[/{id}]                  scoped CRUD
/// /portfolios/{id}/volunteer-works[/{id}]          scoped CRUD
/// /portfolios/{id}/open-source-contributions[/{id}] scoped CRUD
///
/// /side-projects/{id}/contributors[/{id}]          scoped CRUD
/// /side-projects/{id}/api-services[/{id}]          scoped CRUD
/// /side-projects/{id}/dependency-libraries[/{id}]  scoped CRUD
/// /side-projects/{id}/goals[/{id}]                 scoped CRUD
/// /side-projects/{id}/skills                       list, create-and-attach
/// /side-projects/{id}/skills/{skill_id}            attach (PUT), detach (DELETE)
///
/// /work-experiences/{id}/achievements[/{id}]       scoped CRUD
/// /educations/{id}/achievements[/{id}]             scoped CRUD
/// /volunteer-works/{id}/achievements[/{id}]        scoped CRUD
/// /open-source-contributions/{id}/achievements[/{id}] scoped CRUD
/// ```
///
/// Reads are public; every POST, PUT and DELETE requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/images", image::router())
        .nest("/websites", website::router())
        .nest("/skills", skill::router())
        .nest("/portfolios", portfolio::router())
        .nest("/side-projects", side_project::router())
        .nest(
            "/work-experiences",
            achievement::router::<WorkExperienceOwner>(),
        )
        .nest("/educations", achievement::router::<EducationOwner>())
        .nest(
            "/volunteer-works",
            achievement::router::<VolunteerWorkOwner>(),
        )
        .nest(
            "/open-source-contributions",
            achievement::router::<OpenSourceContributionOwner>(),
        )
}
