//! Handlers for the `/alerts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ghost_legion_core::alert::{AlertSeverity, AlertStatus};
use ghost_legion_core::error::CoreError;
use ghost_legion_core::text_enum::TextEnum;
use ghost_legion_core::types::{DbId, Timestamp};
use ghost_legion_core::validation::{is_present, normalize_text, reject_blank, require_fields};
use ghost_legion_db::models::alert::{Alert, CreateAlert, UpdateAlert};
use ghost_legion_db::repositories::AlertRepo;
use serde::Deserialize;

use crate::error::{AppResult, StoreContext};
use crate::middleware::rbac::RequireAuth;
use crate::response::SuccessResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPayload {
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub region: Option<String>,
    pub expires_at: Option<Timestamp>,
}

/// Query parameters for `GET /alerts`.
#[derive(Debug, Default, Deserialize)]
pub struct AlertListParams {
    /// Unlike the body field, an unknown filter value is rejected rather than
    /// silently widened to the default.
    pub status: Option<String>,
}

/// GET /api/alerts
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AlertListParams>,
) -> AppResult<Json<Vec<Alert>>> {
    let status = params
        .status
        .as_deref()
        .filter(|s| is_present(Some(*s)))
        .map(AlertStatus::parse_strict)
        .transpose()?;

    let alerts = AlertRepo::list(&state.pool, status.map(|s| s.as_str()))
        .await
        .context("load alerts")?;
    Ok(Json(alerts))
}

/// POST /api/alerts
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<AlertPayload>,
) -> AppResult<(StatusCode, Json<Alert>)> {
    require_fields(&[
        ("title", is_present(input.title.as_deref())),
        ("message", is_present(input.message.as_deref())),
    ])?;
    let severity = AlertSeverity::parse_or_default(input.severity.as_deref());
    let status = AlertStatus::parse_or_default(input.status.as_deref());

    let alert = AlertRepo::create(
        &state.pool,
        &CreateAlert {
            title: input.title.unwrap_or_default().trim().to_string(),
            message: input.message.unwrap_or_default().trim().to_string(),
            severity: severity.as_str().to_string(),
            status: status.as_str().to_string(),
            region: normalize_text(input.region),
            expires_at: input.expires_at,
            created_by: user.user_id,
        },
    )
    .await
    .context("create alert")?;

    tracing::info!(
        alert_id = alert.id,
        severity = %severity,
        user_id = user.user_id,
        "Alert created"
    );

    Ok((StatusCode::CREATED, Json(alert)))
}

/// PUT /api/alerts/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<AlertPayload>,
) -> AppResult<Json<Alert>> {
    reject_blank("title", input.title.as_deref())?;
    reject_blank("message", input.message.as_deref())?;
    let severity = input
        .severity
        .as_deref()
        .map(|s| AlertSeverity::parse_or_default(Some(s)).as_str().to_string());
    let status = input
        .status
        .as_deref()
        .map(|s| AlertStatus::parse_or_default(Some(s)).as_str().to_string());

    let alert = AlertRepo::update(
        &state.pool,
        id,
        &UpdateAlert {
            title: input.title.map(|t| t.trim().to_string()),
            message: input.message.map(|m| m.trim().to_string()),
            severity,
            status,
            region: normalize_text(input.region),
            expires_at: input.expires_at,
        },
    )
    .await
    .context("update alert")?
    .ok_or(CoreError::NotFound { entity: "Alert", id })?;

    tracing::info!(alert_id = id, status = %alert.status, user_id = user.user_id, "Alert updated");

    Ok(Json(alert))
}

/// DELETE /api/alerts/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = AlertRepo::delete(&state.pool, id)
        .await
        .context("delete alert")?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Alert", id }.into());
    }

    tracing::info!(alert_id = id, user_id = user.user_id, "Alert deleted");
    Ok(Json(SuccessResponse::ok()))
}
