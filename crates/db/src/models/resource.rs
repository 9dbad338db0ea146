//! Resource stock model and DTOs.

use ghost_legion_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// A row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Resource {
    #[ts(type = "number")]
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub quantity: i32,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub minimum_quantity: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateResource {
    pub name: String,
    pub resource_type: String,
    pub quantity: i32,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub minimum_quantity: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateResource {
    pub name: Option<String>,
    pub resource_type: Option<String>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub minimum_quantity: Option<i32>,
}
