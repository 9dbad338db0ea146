//! Route definitions for the `/locations` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::locations;
use crate::state::AppState;

/// Routes mounted at `/locations`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (requires auth)
/// PUT    /{id}   -> update (requires auth)
/// DELETE /{id}   -> delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(locations::list).post(locations::create))
        .route("/{id}", put(locations::update).delete(locations::delete))
}
