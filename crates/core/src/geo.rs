//! Latitude/longitude pairs and the coordinate payloads built from them.
//!
//! On the wire a point is a two-element array `[lat, lng]` and a path is an
//! array of such pairs. Both shapes are stored verbatim as JSONB.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single `[latitude, longitude]` pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng(pub f64, pub f64);

impl LatLng {
    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lng(self) -> f64 {
        self.1
    }

    /// Both components must be finite and within WGS84 bounds.
    pub fn validate(self) -> Result<(), CoreError> {
        let LatLng(lat, lng) = self;
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoreError::Validation(
                "coordinates must be finite numbers".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::Validation(format!(
                "latitude must be between -90 and 90, got {lat}"
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoreError::Validation(format!(
                "longitude must be between -180 and 180, got {lng}"
            )));
        }
        Ok(())
    }
}

/// Either one point or an ordered path of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    Point(LatLng),
    Path(Vec<LatLng>),
}

impl Coordinates {
    /// Number of points carried.
    pub fn len(&self) -> usize {
        match self {
            Coordinates::Point(_) => 1,
            Coordinates::Path(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn points(&self) -> Vec<LatLng> {
        match self {
            Coordinates::Point(p) => vec![*p],
            Coordinates::Path(points) => points.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Coordinates::Point(LatLng(lat, lng)) => serde_json::json!([lat, lng]),
            Coordinates::Path(points) => serde_json::Value::Array(
                points
                    .iter()
                    .map(|LatLng(lat, lng)| serde_json::json!([lat, lng]))
                    .collect(),
            ),
        }
    }
}

/// Parse a raw JSON coordinate payload.
///
/// Accepts `[lat, lng]` or `[[lat, lng], ...]`; anything else is a
/// validation error. Point values are range-checked.
pub fn parse_coordinates(value: &serde_json::Value) -> Result<Coordinates, CoreError> {
    let coords: Coordinates = serde_json::from_value(value.clone()).map_err(|_| {
        CoreError::Validation(
            "coordinates must be a [lat, lng] pair or an array of [lat, lng] pairs".to_string(),
        )
    })?;
    for point in coords.points() {
        point.validate()?;
    }
    Ok(coords)
}

/// Parse a route's waypoint list: a path of at least two points.
pub fn parse_waypoints(value: &serde_json::Value) -> Result<Vec<LatLng>, CoreError> {
    match parse_coordinates(value)? {
        Coordinates::Path(points) if points.len() >= 2 => Ok(points),
        _ => Err(CoreError::Validation(
            "waypoints must be an array of at least 2 [lat, lng] pairs".to_string(),
        )),
    }
}
