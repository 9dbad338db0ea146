//! Route definitions for the `/alerts` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// GET    /       -> list (optional ?status= filter)
/// POST   /       -> create (requires auth)
/// PUT    /{id}   -> update (requires auth)
/// DELETE /{id}   -> delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(alerts::list).post(alerts::create))
        .route("/{id}", put(alerts::update).delete(alerts::delete))
}
