//! Handlers for the `/map-elements` resource.
//!
//! Listing is public. Create, update and delete require an authenticated
//! session; ownership is recorded in `createdBy` but not enforced.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ghost_legion_core::error::CoreError;
use ghost_legion_core::map_element::{parse_geometry, validate_size, MapElementKind, RiskLevel};
use ghost_legion_core::text_enum::TextEnum;
use ghost_legion_core::types::DbId;
use ghost_legion_core::validation::{
    is_present, is_present_json, normalize_text, reject_blank, require_fields,
};
use ghost_legion_db::models::map_element::{CreateMapElement, MapElement, UpdateMapElement};
use ghost_legion_db::repositories::MapElementRepo;
use serde::Deserialize;

use crate::error::{AppResult, StoreContext};
use crate::middleware::rbac::RequireAuth;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Request body for create and update.
///
/// Every field is optional at the type level so that missing, `null` and
/// blank values are all reported by the same validation step.
#[derive(Debug, Default, Deserialize)]
pub struct MapElementPayload {
    #[serde(rename = "type")]
    pub element_type: Option<String>,
    pub coordinates: Option<serde_json::Value>,
    pub color: Option<String>,
    pub size: Option<f64>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub risk: Option<String>,
    pub category: Option<String>,
}

/// GET /api/map-elements
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MapElement>>> {
    let elements = MapElementRepo::list(&state.pool)
        .await
        .context("load map elements")?;
    Ok(Json(elements))
}

/// POST /api/map-elements
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<MapElementPayload>,
) -> AppResult<(StatusCode, Json<MapElement>)> {
    require_fields(&[
        ("type", is_present(input.element_type.as_deref())),
        ("coordinates", is_present_json(input.coordinates.as_ref())),
        ("color", is_present(input.color.as_deref())),
    ])?;

    let kind = MapElementKind::parse_strict(input.element_type.as_deref().unwrap_or_default())?;
    let coordinates = parse_geometry(kind, &input.coordinates.unwrap_or_default())?;
    validate_size(input.size)?;
    let risk = RiskLevel::parse_or_default(input.risk.as_deref());

    let element = MapElementRepo::create(
        &state.pool,
        &CreateMapElement {
            element_type: kind.as_str().to_string(),
            coordinates: coordinates.to_json(),
            color: input.color.unwrap_or_default().trim().to_string(),
            size: input.size,
            label: normalize_text(input.label),
            description: normalize_text(input.description),
            category: normalize_text(input.category),
            risk: risk.as_str().to_string(),
            created_by: user.user_id,
        },
    )
    .await
    .context("create map element")?;

    tracing::info!(
        element_id = element.id,
        kind = %kind,
        risk = %risk,
        user_id = user.user_id,
        "Map element created"
    );

    Ok((StatusCode::CREATED, Json(element)))
}

/// PUT /api/map-elements/{id}
///
/// Partial update. The element type is fixed at creation: a supplied `type`
/// must be non-blank and normalize to the stored one. Supplied coordinates are validated
/// against the stored type.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<MapElementPayload>,
) -> AppResult<Json<MapElement>> {
    let existing = MapElementRepo::find_by_id(&state.pool, id)
        .await
        .context("update map element")?
        .ok_or(CoreError::NotFound {
            entity: "MapElement",
            id,
        })?;

    let stored_kind = MapElementKind::parse(&existing.element_type).ok_or_else(|| {
        CoreError::Internal(format!(
            "map element {id} has unrecognized stored type '{}'",
            existing.element_type
        ))
    })?;

    reject_blank("type", input.element_type.as_deref())?;
    if let Some(raw) = input.element_type.as_deref() {
        let requested = MapElementKind::parse_strict(raw)?;
        if requested != stored_kind {
            return Err(CoreError::Validation(format!(
                "type is fixed at creation: element {id} is {stored_kind}, cannot change to {requested}"
            ))
            .into());
        }
    }

    let coordinates = match input.coordinates.as_ref().filter(|c| !c.is_null()) {
        Some(raw) => Some(parse_geometry(stored_kind, raw)?.to_json()),
        None => None,
    };
    reject_blank("color", input.color.as_deref())?;
    validate_size(input.size)?;
    let risk = input
        .risk
        .as_deref()
        .map(|r| RiskLevel::parse_or_default(Some(r)).as_str().to_string());

    let element = MapElementRepo::update(
        &state.pool,
        id,
        &UpdateMapElement {
            coordinates,
            color: input.color.map(|c| c.trim().to_string()),
            size: input.size,
            label: normalize_text(input.label),
            description: normalize_text(input.description),
            category: normalize_text(input.category),
            risk,
        },
    )
    .await
    .context("update map element")?
    .ok_or(CoreError::NotFound {
        entity: "MapElement",
        id,
    })?;

    tracing::info!(element_id = id, user_id = user.user_id, "Map element updated");

    Ok(Json(element))
}

/// DELETE /api/map-elements/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = MapElementRepo::delete(&state.pool, id)
        .await
        .context("delete map element")?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "MapElement",
            id,
        }
        .into());
    }

    tracing::info!(element_id = id, user_id = user.user_id, "Map element deleted");

    Ok(Json(SuccessResponse::ok()))
}
