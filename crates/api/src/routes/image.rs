//! Route definitions for the `/images` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::image;
use crate::state::AppState;

/// Routes mounted at `/images`.
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
        .route("/", get(image::list).post(image::create))
        .route(
            "/{id}",
            get(image::get_by_id)
                .put(image::update)
                .delete(image::delete),
        )
}
