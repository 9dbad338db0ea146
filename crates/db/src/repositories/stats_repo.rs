//! Aggregate counts across every operational table.

use sqlx::PgPool;

use crate::models::stats::{AdminStats, StatsRow};

pub struct StatsRepo;

impl StatsRepo {
    /// Collect every dashboard count in one round trip.
    pub async fn collect(pool: &PgPool) -> Result<AdminStats, sqlx::Error> {
        let row = sqlx::query_as::<_, StatsRow>(
            "SELECT
                (SELECT COUNT(*) FROM locations) AS locations_total,
                (SELECT COUNT(*) FROM locations WHERE status = 'OPERATIONAL') AS locations_operational,
                (SELECT COALESCE(SUM(capacity), 0)::BIGINT FROM locations) AS locations_capacity,
                (SELECT COALESCE(SUM(occupancy), 0)::BIGINT FROM locations) AS locations_occupancy,
                (SELECT COUNT(*) FROM personnel) AS personnel_total,
                (SELECT COUNT(*) FROM personnel WHERE status = 'ACTIVE') AS personnel_active,
                (SELECT COUNT(*) FROM personnel WHERE status = 'DEPLOYED') AS personnel_deployed,
                (SELECT COUNT(*) FROM evacuation_routes) AS routes_total,
                (SELECT COUNT(*) FROM evacuation_routes WHERE status = 'OPEN') AS routes_open,
                (SELECT COUNT(*) FROM evacuation_routes WHERE status = 'CLOSED') AS routes_closed,
                (SELECT COUNT(*) FROM resources) AS resources_total,
                (SELECT COUNT(*) FROM resources WHERE status = 'LOW') AS resources_low,
                (SELECT COUNT(*) FROM resources WHERE status = 'DEPLETED') AS resources_depleted,
                (SELECT COUNT(*) FROM alerts WHERE status = 'ACTIVE') AS alerts_active,
                (SELECT COUNT(*) FROM alerts WHERE status = 'ACTIVE' AND severity = 'CRITICAL') AS alerts_critical,
                (SELECT COUNT(*) FROM map_elements) AS map_elements_total,
                (SELECT COUNT(*) FROM map_elements WHERE risk = 'LOW') AS map_elements_low,
                (SELECT COUNT(*) FROM map_elements WHERE risk = 'MEDIUM') AS map_elements_medium,
                (SELECT COUNT(*) FROM map_elements WHERE risk = 'HIGH') AS map_elements_high",
        )
        .fetch_one(pool)
        .await?;
        Ok(row.into())
    }
}
