//! Personnel model and DTOs.

use ghost_legion_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// A row from the `personnel` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Person {
    #[ts(type = "number")]
    pub id: DbId,
    pub name: String,
    /// Free-text function, e.g. "Medic" or "Logistics lead".
    pub role: String,
    pub status: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Display string; not a reference to a location row.
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreatePerson {
    pub name: String,
    pub role: String,
    pub status: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePerson {
    pub name: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub notes: Option<String>,
}
