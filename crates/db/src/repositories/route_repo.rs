//! Repository for the `evacuation_routes` table.

use ghost_legion_core::types::DbId;
use sqlx::PgPool;

use crate::models::route::{CreateEvacuationRoute, EvacuationRoute, UpdateEvacuationRoute};

const COLUMNS: &str = "id, name, start_location, end_location, distance_km, estimated_minutes, \
                        capacity, status, waypoints, description, created_at, updated_at";

pub struct EvacuationRouteRepo;

impl EvacuationRouteRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<EvacuationRoute>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM evacuation_routes ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, EvacuationRoute>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateEvacuationRoute,
    ) -> Result<EvacuationRoute, sqlx::Error> {
        let query = format!(
            "INSERT INTO evacuation_routes
                (name, start_location, end_location, distance_km, estimated_minutes,
                 capacity, status, waypoints, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EvacuationRoute>(&query)
            .bind(&input.name)
            .bind(&input.start_location)
            .bind(&input.end_location)
            .bind(input.distance_km)
            .bind(input.estimated_minutes)
            .bind(input.capacity)
            .bind(&input.status)
            .bind(&input.waypoints)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvacuationRoute,
    ) -> Result<Option<EvacuationRoute>, sqlx::Error> {
        let query = format!(
            "UPDATE evacuation_routes SET
                name = COALESCE($2, name),
                start_location = COALESCE($3, start_location),
                end_location = COALESCE($4, end_location),
                distance_km = COALESCE($5, distance_km),
                estimated_minutes = COALESCE($6, estimated_minutes),
                capacity = COALESCE($7, capacity),
                status = COALESCE($8, status),
                waypoints = COALESCE($9, waypoints),
                description = COALESCE($10, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EvacuationRoute>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.start_location)
            .bind(&input.end_location)
            .bind(input.distance_km)
            .bind(input.estimated_minutes)
            .bind(input.capacity)
            .bind(&input.status)
            .bind(&input.waypoints)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM evacuation_routes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
