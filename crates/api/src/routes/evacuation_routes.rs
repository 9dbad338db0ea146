//! Route definitions for the `/routes` resource (evacuation routes).

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::evacuation_routes;
use crate::state::AppState;

/// Routes mounted at `/routes`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (requires auth)
/// PUT    /{id}   -> update (requires auth)
/// DELETE /{id}   -> delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(evacuation_routes::list).post(evacuation_routes::create))
        .route("/{id}", put(evacuation_routes::update).delete(evacuation_routes::delete))
}
