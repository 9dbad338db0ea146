//! Evacuation route model and DTOs.

use ghost_legion_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// A row from the `evacuation_routes` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EvacuationRoute {
    #[ts(type = "number")]
    pub id: DbId,
    pub name: String,
    pub start_location: String,
    pub end_location: String,
    pub distance_km: Option<f64>,
    pub estimated_minutes: Option<i32>,
    pub capacity: Option<i32>,
    pub status: String,
    #[ts(type = "Array<[number, number]> | null")]
    pub waypoints: Option<serde_json::Value>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateEvacuationRoute {
    pub name: String,
    pub start_location: String,
    pub end_location: String,
    pub distance_km: Option<f64>,
    pub estimated_minutes: Option<i32>,
    pub capacity: Option<i32>,
    pub status: String,
    pub waypoints: Option<serde_json::Value>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEvacuationRoute {
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
