//! Handlers for the `/locations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ghost_legion_core::error::CoreError;
use ghost_legion_core::location::{validate_position, LocationKind, LocationStatus};
use ghost_legion_core::text_enum::TextEnum;
use ghost_legion_core::types::DbId;
use ghost_legion_core::validation::{
    is_present, normalize_text, reject_blank, require_fields, validate_non_negative,
};
use ghost_legion_db::models::location::{CreateLocation, Location, UpdateLocation};
use ghost_legion_db::repositories::LocationRepo;
use serde::Deserialize;

use crate::error::{AppResult, StoreContext};
use crate::middleware::rbac::RequireAuth;
use crate::response::SuccessResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LocationPayload {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub location_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
    pub occupancy: Option<i32>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub facilities: Option<Vec<String>>,
    pub contact: Option<String>,
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| normalize_text(Some(item)))
        .collect()
}

/// GET /api/locations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Location>>> {
    let locations = LocationRepo::list(&state.pool)
        .await
        .context("load locations")?;
    Ok(Json(locations))
}

/// POST /api/locations
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<LocationPayload>,
) -> AppResult<(StatusCode, Json<Location>)> {
    require_fields(&[
        ("name", is_present(input.name.as_deref())),
        ("type", is_present(input.location_type.as_deref())),
        ("latitude", input.latitude.is_some()),
        ("longitude", input.longitude.is_some()),
    ])?;

    let kind = LocationKind::parse_strict(input.location_type.as_deref().unwrap_or_default())?;
    let (latitude, longitude) = (
        input.latitude.unwrap_or_default(),
        input.longitude.unwrap_or_default(),
    );
    validate_position(latitude, longitude)?;
    validate_non_negative("capacity", input.capacity)?;
    validate_non_negative("occupancy", input.occupancy)?;
    let status = LocationStatus::parse_or_default(input.status.as_deref());

    let location = LocationRepo::create(
        &state.pool,
        &CreateLocation {
            name: input.name.unwrap_or_default().trim().to_string(),
            location_type: kind.as_str().to_string(),
            latitude,
            longitude,
            address: normalize_text(input.address),
            capacity: input.capacity.unwrap_or(0),
            occupancy: input.occupancy.unwrap_or(0),
            status: status.as_str().to_string(),
            description: normalize_text(input.description),
            facilities: clean_list(input.facilities.unwrap_or_default()),
            contact: normalize_text(input.contact),
        },
    )
    .await
    .context("create location")?;

    tracing::info!(location_id = location.id, kind = %kind, user_id = user.user_id, "Location created");

    Ok((StatusCode::CREATED, Json(location)))
}

/// PUT /api/locations/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<LocationPayload>,
) -> AppResult<Json<Location>> {
    reject_blank("name", input.name.as_deref())?;
    reject_blank("type", input.location_type.as_deref())?;
    let kind = input
        .location_type
        .as_deref()
        .map(LocationKind::parse_strict)
        .transpose()?;

    // A position is validated as a pair, so a lone coordinate is checked
    // against the stored counterpart.
    if input.latitude.is_some() || input.longitude.is_some() {
        let existing = LocationRepo::find_by_id(&state.pool, id)
            .await
            .context("update location")?
            .ok_or(CoreError::NotFound {
                entity: "Location",
                id,
            })?;
        validate_position(
            input.latitude.unwrap_or(existing.latitude),
            input.longitude.unwrap_or(existing.longitude),
        )?;
    }
    validate_non_negative("capacity", input.capacity)?;
    validate_non_negative("occupancy", input.occupancy)?;
    let status = input
        .status
        .as_deref()
        .map(|s| LocationStatus::parse_or_default(Some(s)).as_str().to_string());

    let location = LocationRepo::update(
        &state.pool,
        id,
        &UpdateLocation {
            name: input.name.map(|n| n.trim().to_string()),
            location_type: kind.map(|k| k.as_str().to_string()),
            latitude: input.latitude,
            longitude: input.longitude,
            address: normalize_text(input.address),
            capacity: input.capacity,
            occupancy: input.occupancy,
            status,
            description: normalize_text(input.description),
            facilities: input.facilities.map(clean_list),
            contact: normalize_text(input.contact),
        },
    )
    .await
    .context("update location")?
    .ok_or(CoreError::NotFound {
        entity: "Location",
        id,
    })?;

    tracing::info!(location_id = id, user_id = user.user_id, "Location updated");

    Ok(Json(location))
}

/// DELETE /api/locations/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = LocationRepo::delete(&state.pool, id)
        .await
        .context("delete location")?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Location",
            id,
        }
        .into());
    }

    tracing::info!(location_id = id, user_id = user.user_id, "Location deleted");
    Ok(Json(SuccessResponse::ok()))
}
