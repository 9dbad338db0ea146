//! Wire types for map elements as seen by the client.

use chrono::{DateTime, Utc};
use ghost_legion_core::geo::Coordinates;
use ghost_legion_core::map_element::{display_risk, MapElementKind, RiskLevel};
use ghost_legion_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};

/// A map element as returned by `GET /api/map-elements`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapElement {
    pub id: DbId,
    #[serde(rename = "type")]
    pub kind: MapElementKind,
    pub coordinates: Coordinates,
    pub color: String,
    pub size: Option<f64>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Normalized on arrival; any casing or unknown value reads as a level.
    #[serde(deserialize_with = "lenient_risk")]
    pub risk: RiskLevel,
    pub created_by: Option<DbId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn lenient_risk<'de, D>(deserializer: D) -> Result<RiskLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(display_risk(raw.as_deref().unwrap_or_default()))
}

/// Body of `PUT /api/map-elements/{id}`. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
