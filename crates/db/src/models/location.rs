//! Location model and DTOs.

use ghost_legion_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Location {
    #[ts(type = "number")]
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub location_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub capacity: i32,
    pub occupancy: i32,
    pub status: String,
    pub description: Option<String>,
    pub facilities: Vec<String>,
    pub contact: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateLocation {
    pub name: String,
    pub location_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub capacity: i32,
    pub occupancy: i32,
    pub status: String,
    pub description: Option<String>,
    pub facilities: Vec<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLocation {
    pub name: Option<String>,
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
