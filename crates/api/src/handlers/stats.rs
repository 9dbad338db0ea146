//! Handler for `GET /admin/stats`.

use axum::extract::State;
use axum::Json;
use ghost_legion_db::models::stats::AdminStats;
use ghost_legion_db::repositories::StatsRepo;

use crate::error::{AppResult, StoreContext};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn get_stats(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<AdminStats>> {
    let stats = StatsRepo::collect(&state.pool)
        .await
        .context("load statistics")?;
    Ok(Json(stats))
}
