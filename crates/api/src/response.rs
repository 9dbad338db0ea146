//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "success": true }`, returned by every record delete.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
