//! Aggregate counts for the admin dashboard.

use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// Flat result of the single aggregate query in `StatsRepo`.
#[derive(Debug, Clone, FromRow)]
pub struct StatsRow {
    pub locations_total: i64,
    pub locations_operational: i64,
    pub locations_capacity: i64,
    pub locations_occupancy: i64,
    pub personnel_total: i64,
    pub personnel_active: i64,
    pub personnel_deployed: i64,
    pub routes_total: i64,
    pub routes_open: i64,
    pub routes_closed: i64,
    pub resources_total: i64,
    pub resources_low: i64,
    pub resources_depleted: i64,
    pub alerts_active: i64,
    pub alerts_critical: i64,
    pub map_elements_total: i64,
    pub map_elements_low: i64,
    pub map_elements_medium: i64,
    pub map_elements_high: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LocationStats {
    #[ts(type = "number")]
    pub total: i64,
    #[ts(type = "number")]
    pub operational: i64,
    #[ts(type = "number")]
    pub total_capacity: i64,
    #[ts(type = "number")]
    pub total_occupancy: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonnelStats {
    #[ts(type = "number")]
    pub total: i64,
    #[ts(type = "number")]
    pub active: i64,
    #[ts(type = "number")]
    pub deployed: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RouteStats {
    #[ts(type = "number")]
    pub total: i64,
    #[ts(type = "number")]
    pub open: i64,
    #[ts(type = "number")]
    pub closed: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResourceStats {
    #[ts(type = "number")]
    pub total: i64,
    #[ts(type = "number")]
    pub low: i64,
    #[ts(type = "number")]
    pub depleted: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AlertStats {
    #[ts(type = "number")]
    pub active: i64,
    #[ts(type = "number")]
    pub critical_active: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MapElementStats {
    #[ts(type = "number")]
    pub total: i64,
    #[ts(type = "number")]
    pub low_risk: i64,
    #[ts(type = "number")]
    pub medium_risk: i64,
    #[ts(type = "number")]
    pub high_risk: i64,
}

/// Response body of `GET /api/admin/stats`.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdminStats {
    pub locations: LocationStats,
    pub personnel: PersonnelStats,
    pub routes: RouteStats,
    pub resources: ResourceStats,
    pub alerts: AlertStats,
    pub map_elements: MapElementStats,
}

impl From<StatsRow> for AdminStats {
    fn from(row: StatsRow) -> Self {
        Self {
            locations: LocationStats {
                total: row.locations_total,
                operational: row.locations_operational,
                total_capacity: row.locations_capacity,
                total_occupancy: row.locations_occupancy,
            },
            personnel: PersonnelStats {
                total: row.personnel_total,
                active: row.personnel_active,
                deployed: row.personnel_deployed,
            },
            routes: RouteStats {
                total: row.routes_total,
                open: row.routes_open,
                closed: row.routes_closed,
            },
            resources: ResourceStats {
                total: row.resources_total,
                low: row.resources_low,
                depleted: row.resources_depleted,
            },
            alerts: AlertStats {
                active: row.alerts_active,
                critical_active: row.alerts_critical,
            },
            map_elements: MapElementStats {
                total: row.map_elements_total,
                low_risk: row.map_elements_low,
                medium_risk: row.map_elements_medium,
                high_risk: row.map_elements_high,
            },
        }
    }
}
