//! Alert model and DTOs.

use ghost_legion_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// A row from the `alerts` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Alert {
    #[ts(type = "number")]
    pub id: DbId,
    pub title: String,
    pub message: String,
    pub severity: String,
    pub status: String,
    pub region: Option<String>,
    pub expires_at: Option<Timestamp>,
    #[ts(type = "number | null")]
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateAlert {
    pub title: String,
    pub message: String,
    pub severity: String,
    pub status: String,
    pub region: Option<String>,
    pub expires_at: Option<Timestamp>,
    pub created_by: DbId,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAlert {
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub region: Option<String>,
    pub expires_at: Option<Timestamp>,
}
