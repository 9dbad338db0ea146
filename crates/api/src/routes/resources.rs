//! Route definitions for the `/resources` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::resources;
use crate::state::AppState;

/// Routes mounted at `/resources`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (requires auth)
/// PUT    /{id}   -> update (requires auth)
/// DELETE /{id}   -> delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resources::list).post(resources::create))
        .route("/{id}", put(resources::update).delete(resources::delete))
}
