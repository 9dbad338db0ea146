//! Handlers for the `/routes` resource (evacuation routes).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ghost_legion_core::error::CoreError;
use ghost_legion_core::geo::{parse_waypoints, Coordinates};
use ghost_legion_core::route::RouteStatus;
use ghost_legion_core::text_enum::TextEnum;
use ghost_legion_core::types::DbId;
use ghost_legion_core::validation::{
    is_present, normalize_text, reject_blank, require_fields, validate_non_negative,
    validate_non_negative_f64,
};
use ghost_legion_db::models::route::{
    CreateEvacuationRoute, EvacuationRoute, UpdateEvacuationRoute,
};
use ghost_legion_db::repositories::EvacuationRouteRepo;
use serde::Deserialize;

use crate::error::{AppResult, StoreContext};
use crate::middleware::rbac::RequireAuth;
use crate::response::SuccessResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePayload {
    pub name: Option<String>,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub distance_km: Option<f64>,
    pub estimated_minutes: Option<i32>,
    pub capacity: Option<i32>,
    pub status: Option<String>,
    pub waypoints: Option<serde_json::Value>,
    pub description: Option<String>,
}

impl RoutePayload {
    fn validate_numbers(&self) -> Result<(), CoreError> {
        validate_non_negative_f64("distanceKm", self.distance_km)?;
        validate_non_negative("estimatedMinutes", self.estimated_minutes)?;
        validate_non_negative("capacity", self.capacity)
    }

    /// Validated waypoints in storage form; `null` counts as absent.
    fn waypoints_json(&self) -> Result<Option<serde_json::Value>, CoreError> {
        match self.waypoints.as_ref().filter(|w| !w.is_null()) {
            Some(raw) => Ok(Some(Coordinates::Path(parse_waypoints(raw)?).to_json())),
            None => Ok(None),
        }
    }
}

/// GET /api/routes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EvacuationRoute>>> {
    let routes = EvacuationRouteRepo::list(&state.pool)
        .await
        .context("load evacuation routes")?;
    Ok(Json(routes))
}

/// POST /api/routes
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<RoutePayload>,
) -> AppResult<(StatusCode, Json<EvacuationRoute>)> {
    require_fields(&[
        ("name", is_present(input.name.as_deref())),
        ("startLocation", is_present(input.start_location.as_deref())),
        ("endLocation", is_present(input.end_location.as_deref())),
    ])?;
    input.validate_numbers()?;
    let waypoints = input.waypoints_json()?;
    let status = RouteStatus::parse_or_default(input.status.as_deref());

    let route = EvacuationRouteRepo::create(
        &state.pool,
        &CreateEvacuationRoute {
            name: input.name.unwrap_or_default().trim().to_string(),
            start_location: input.start_location.unwrap_or_default().trim().to_string(),
            end_location: input.end_location.unwrap_or_default().trim().to_string(),
            distance_km: input.distance_km,
            estimated_minutes: input.estimated_minutes,
            capacity: input.capacity,
            status: status.as_str().to_string(),
            waypoints,
            description: normalize_text(input.description),
        },
    )
    .await
    .context("create evacuation route")?;

    tracing::info!(route_id = route.id, user_id = user.user_id, "Evacuation route created");

    Ok((StatusCode::CREATED, Json(route)))
}

/// PUT /api/routes/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<RoutePayload>,
) -> AppResult<Json<EvacuationRoute>> {
    reject_blank("name", input.name.as_deref())?;
    reject_blank("startLocation", input.start_location.as_deref())?;
    reject_blank("endLocation", input.end_location.as_deref())?;
    input.validate_numbers()?;
    let waypoints = input.waypoints_json()?;
    let status = input
        .status
        .as_deref()
        .map(|s| RouteStatus::parse_or_default(Some(s)).as_str().to_string());

    let route = EvacuationRouteRepo::update(
        &state.pool,
        id,
        &UpdateEvacuationRoute {
            name: input.name.map(|v| v.trim().to_string()),
            start_location: input.start_location.map(|v| v.trim().to_string()),
            end_location: input.end_location.map(|v| v.trim().to_string()),
            distance_km: input.distance_km,
            estimated_minutes: input.estimated_minutes,
            capacity: input.capacity,
            status,
            waypoints,
            description: normalize_text(input.description),
        },
    )
    .await
    .context("update evacuation route")?
    .ok_or(CoreError::NotFound {
        entity: "EvacuationRoute",
        id,
    })?;

    tracing::info!(route_id = id, user_id = user.user_id, "Evacuation route updated");

    Ok(Json(route))
}

/// DELETE /api/routes/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = EvacuationRouteRepo::delete(&state.pool, id)
        .await
        .context("delete evacuation route")?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "EvacuationRoute",
            id,
        }
        .into());
    }

    tracing::info!(route_id = id, user_id = user.user_id, "Evacuation route deleted");
    Ok(Json(SuccessResponse::ok()))
}
