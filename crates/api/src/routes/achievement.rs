//! Route definitions for achievements, shared by the four owner collections.

use axum::routing::get;
use axum::Router;

use crate::handlers::achievement::{self, OwnerKind};
use crate::state::AppState;

/// Achievement routes for one owner kind, mounted at the owner collection
/// (e.g. `/work-experiences`).
///
/// ```text
/// GET    /{owner_id}/achievements         -> list
/// POST   /{owner_id}/achievements         -> create
/// GET    /{owner_id}/achievements/{id}    -> get_by_id
/// PUT    /{owner_id}/achievements/{id}    -> update
/// DELETE /{owner_id}/achievements/{id}    -> delete
/// ```
pub fn router<K: OwnerKind>() -> Router<AppState> {
    Router::new()
        .route(
            "/{owner_id}/achievements",
            get(achievement::list::<K>).post(achievement::create::<K>),
        )
        .route(
            "/{owner_id}/achievements/{id}",
            get(achievement::get_by_id::<K>)
                .put(achievement::update::<K>)
                .delete(achievement::delete::<K>),
        )
}
