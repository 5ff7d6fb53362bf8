//! Route definitions for the `/websites` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::website;
use crate::state::AppState;

/// Routes mounted at `/websites`.
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
        .route("/", get(website::list).post(website::create))
        .route(
            "/{id}",
            get(website::get_by_id)
                .put(website::update)
                .delete(website::delete),
        )
}
