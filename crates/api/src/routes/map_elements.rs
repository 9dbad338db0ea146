//! Route definitions for the `/map-elements` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::map_elements;
use crate::state::AppState;

/// Routes mounted at `/map-elements`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (requires auth)
/// PUT    /{id}   -> update (requires auth)
/// DELETE /{id}   -> delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(map_elements::list).post(map_elements::create))
        .route("/{id}", put(map_elements::update).delete(map_elements::delete))
}
