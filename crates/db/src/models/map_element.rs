//! Map element model and DTOs.

use ghost_legion_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// A row from the `map_elements` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MapElement {
    #[ts(type = "number")]
    pub id: DbId,
    /// `MARKER`, `POLYGON`, `POLYLINE` or `CIRCLE`.
    #[serde(rename = "type")]
    pub element_type: String,
    /// `[lat, lng]` for point kinds, `[[lat, lng], ...]` for paths.
    #[ts(type = "[number, number] | Array<[number, number]>")]
    pub coordinates: serde_json::Value,
    pub color: String,
    pub size: Option<f64>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// `LOW`, `MEDIUM` or `HIGH`.
    pub risk: String,
    #[ts(type = "number | null")]
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO. Values are already normalized by the caller.
#[derive(Debug, Clone)]
pub struct CreateMapElement {
    pub element_type: String,
    pub coordinates: serde_json::Value,
    pub color: String,
    pub size: Option<f64>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub risk: String,
    pub created_by: DbId,
}

/// Partial update DTO. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateMapElement {
    pub coordinates: Option<serde_json::Value>,
    pub color: Option<String>,
    pub size: Option<f64>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub risk: Option<String>,
}
