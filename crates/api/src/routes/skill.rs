//! Route definitions for the `/skills` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::skill;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skill::list).post(skill::create))
        .route(
            "/{id}",
            get(skill::get_by_id)
                .put(skill::update)
                .delete(skill::delete),
        )
}
