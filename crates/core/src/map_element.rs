//! Map element kinds, risk levels, and geometry rules.
//!
//! A map element is an annotation drawn on the strategic map. Its kind
//! decides how `coordinates` is read:
//!
//! | kind       | coordinates                   |
//! |------------|-------------------------------|
//! | `MARKER`   | one `[lat, lng]` pair         |
//! | `CIRCLE`   | one `[lat, lng]` pair (centre)|
//! | `POLYGON`  | closed path, >= 2 pairs       |
//! | `POLYLINE` | open path, >= 2 pairs         |

use serde::Serialize;

use crate::define_text_enum;
use crate::error::CoreError;
use crate::geo::{parse_coordinates, Coordinates};
use crate::text_enum::TextEnum;

/// Minimum number of points for polygon and polyline paths.
pub const MIN_PATH_POINTS: usize = 2;

/// Colors offered by the editor palette. The server accepts any string.
pub const PALETTE: &[&str] = &[
    "#EF4444", "#F59E0B", "#10B981", "#3B82F6", "#8B5CF6", "#6B7280",
];

/// Palette entry used when the editor form is first opened.
pub const DEFAULT_COLOR: &str = "#3B82F6";

define_text_enum! {
    /// Shape of a map element. Fixed at creation.
    MapElementKind("type") {
        Marker = "MARKER",
        Polygon = "POLYGON",
        Polyline = "POLYLINE",
        Circle = "CIRCLE",
    }
}

define_text_enum! {
    /// Coarse severity tag used for visual coding.
    RiskLevel("risk") {
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Low
    }
}

impl MapElementKind {
    /// Whether this kind is anchored on a single point.
    pub fn is_point(self) -> bool {
        matches!(self, MapElementKind::Marker | MapElementKind::Circle)
    }
}

/// Normalize a risk string the way records are displayed: any casing maps
/// to the canonical level, anything unrecognized reads as `LOW`.
pub fn display_risk(raw: &str) -> RiskLevel {
    RiskLevel::parse_or_default(Some(raw))
}

/// Check that a coordinate payload fits the element kind.
///
/// A one-point path is accepted for point kinds and collapsed to a point so
/// storage always holds the canonical shape.
pub fn validate_geometry(
    kind: MapElementKind,
    coords: Coordinates,
) -> Result<Coordinates, CoreError> {
    match (kind.is_point(), coords) {
        (true, Coordinates::Point(p)) => Ok(Coordinates::Point(p)),
        (true, Coordinates::Path(points)) if points.len() == 1 => {
            Ok(Coordinates::Point(points[0]))
        }
        (true, _) => Err(CoreError::Validation(format!(
            "{kind} requires exactly one [lat, lng] point"
        ))),
        (false, Coordinates::Path(points)) if points.len() >= MIN_PATH_POINTS => {
            Ok(Coordinates::Path(points))
        }
        (false, _) => Err(CoreError::Validation(format!(
            "{kind} requires a path of at least {MIN_PATH_POINTS} [lat, lng] points"
        ))),
    }
}

/// Parse raw JSON coordinates and validate them against the kind.
pub fn parse_geometry(
    kind: MapElementKind,
    raw: &serde_json::Value,
) -> Result<Coordinates, CoreError> {
    validate_geometry(kind, parse_coordinates(raw)?)
}

/// Reject a `size` that is present but negative or not finite.
pub fn validate_size(size: Option<f64>) -> Result<(), CoreError> {
    crate::validation::validate_non_negative_f64("size", size)
}

/// Create payload for a map element, as sent to `POST /api/map-elements`.
///
/// Produced by the map editor; the server applies the same rules when it
/// receives it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapElementDraft {
    #[serde(rename = "type")]
    pub kind: MapElementKind,
    pub coordinates: Coordinates,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub risk: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
