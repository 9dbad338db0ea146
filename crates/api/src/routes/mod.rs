pub mod admin;
pub mod alerts;
pub mod auth;
pub mod evacuation_routes;
pub mod health;
pub mod locations;
pub mod map_elements;
pub mod people;
pub mod resources;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
/// /auth/me                             current user (requires auth)
///
/// /admin/users                         list, create (admin only)
/// /admin/users/{id}                    get, update, deactivate
/// /admin/users/{id}/reset-password     reset password
/// /admin/stats                         aggregate counts (admin only)
///
/// /map-elements                        list (public), create
/// /map-elements/{id}                   update, delete
/// /locations                           list (public), create
/// /locations/{id}                      update, delete
/// /people                              list (public), create
/// /people/{id}                         update, delete
/// /routes                              list (public), create
/// /routes/{id}                         update, delete
/// /resources                           list (public), create
/// /resources/{id}                      update, delete
/// /alerts?status=                      list (public, optional filter), create
/// /alerts/{id}                         update, delete
/// ```
///
/// Writes require a bearer token; the extractors in the handlers enforce it.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout, me).
        .nest("/auth", auth::router())
        // Admin routes (user management + statistics).
        .nest("/admin", admin::router())
        // Map annotations.
        .nest("/map-elements", map_elements::router())
        // Shelters, depots, medical posts.
        .nest("/locations", locations::router())
        .nest("/people", people::router())
        .nest("/routes", evacuation_routes::router())
        .nest("/resources", resources::router())
        .nest("/alerts", alerts::router())
}
