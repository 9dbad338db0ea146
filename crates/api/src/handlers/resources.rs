//! Handlers for the `/resources` resource (stockpiles).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ghost_legion_core::error::CoreError;
use ghost_legion_core::resource::{ResourceKind, ResourceStatus};
use ghost_legion_core::text_enum::TextEnum;
use ghost_legion_core::types::DbId;
use ghost_legion_core::validation::{
    is_present, normalize_text, reject_blank, require_fields, validate_non_negative,
};
use ghost_legion_db::models::resource::{CreateResource, Resource, UpdateResource};
use ghost_legion_db::repositories::ResourceRepo;
use serde::Deserialize;

use crate::error::{AppResult, StoreContext};
use crate::middleware::rbac::RequireAuth;
use crate::response::SuccessResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePayload {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub minimum_quantity: Option<i32>,
}

/// GET /api/resources
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Resource>>> {
    let resources = ResourceRepo::list(&state.pool)
        .await
        .context("load resources")?;
    Ok(Json(resources))
}

/// POST /api/resources
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<ResourcePayload>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    require_fields(&[
        ("name", is_present(input.name.as_deref())),
        ("type", is_present(input.resource_type.as_deref())),
        ("quantity", input.quantity.is_some()),
    ])?;
    let kind = ResourceKind::parse_strict(input.resource_type.as_deref().unwrap_or_default())?;
    validate_non_negative("quantity", input.quantity)?;
    validate_non_negative("minimumQuantity", input.minimum_quantity)?;
    let status = ResourceStatus::parse_or_default(input.status.as_deref());

    let resource = ResourceRepo::create(
        &state.pool,
        &CreateResource {
            name: input.name.unwrap_or_default().trim().to_string(),
            resource_type: kind.as_str().to_string(),
            quantity: input.quantity.unwrap_or_default(),
            unit: normalize_text(input.unit),
            location: normalize_text(input.location),
            status: status.as_str().to_string(),
            minimum_quantity: input.minimum_quantity,
        },
    )
    .await
    .context("create resource")?;

    tracing::info!(resource_id = resource.id, kind = %kind, user_id = user.user_id, "Resource created");

    Ok((StatusCode::CREATED, Json(resource)))
}

/// PUT /api/resources/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<ResourcePayload>,
) -> AppResult<Json<Resource>> {
    reject_blank("name", input.name.as_deref())?;
    reject_blank("type", input.resource_type.as_deref())?;
    let kind = input
        .resource_type
        .as_deref()
        .map(ResourceKind::parse_strict)
        .transpose()?;
    validate_non_negative("quantity", input.quantity)?;
    validate_non_negative("minimumQuantity", input.minimum_quantity)?;
    let status = input
        .status
        .as_deref()
        .map(|s| ResourceStatus::parse_or_default(Some(s)).as_str().to_string());

    let resource = ResourceRepo::update(
        &state.pool,
        id,
        &UpdateResource {
            name: input.name.map(|n| n.trim().to_string()),
            resource_type: kind.map(|k| k.as_str().to_string()),
            quantity: input.quantity,
            unit: normalize_text(input.unit),
            location: normalize_text(input.location),
            status,
            minimum_quantity: input.minimum_quantity,
        },
    )
    .await
    .context("update resource")?
    .ok_or(CoreError::NotFound {
        entity: "Resource",
        id,
    })?;

    tracing::info!(resource_id = id, user_id = user.user_id, "Resource updated");

    Ok(Json(resource))
}

/// DELETE /api/resources/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = ResourceRepo::delete(&state.pool, id)
        .await
        .context("delete resource")?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Resource",
            id,
        }
        .into());
    }

    tracing::info!(resource_id = id, user_id = user.user_id, "Resource deleted");
    Ok(Json(SuccessResponse::ok()))
}
