//! Repository for the `locations` table.

use ghost_legion_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{CreateLocation, Location, UpdateLocation};

const COLUMNS: &str = "id, name, location_type, latitude, longitude, address, capacity, \
                        occupancy, status, description, facilities, contact, created_at, updated_at";

pub struct LocationRepo;

impl LocationRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations
                (name, location_type, latitude, longitude, address, capacity, occupancy,
                 status, description, facilities, contact)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.name)
            .bind(&input.location_type)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.address)
            .bind(input.capacity)
            .bind(input.occupancy)
            .bind(&input.status)
            .bind(&input.description)
            .bind(&input.facilities)
            .bind(&input.contact)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLocation,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!(
            "UPDATE locations SET
                name = COALESCE($2, name),
                location_type = COALESCE($3, location_type),
                latitude = COALESCE($4, latitude),
                longitude = COALESCE($5, longitude),
                address = COALESCE($6, address),
                capacity = COALESCE($7, capacity),
                occupancy = COALESCE($8, occupancy),
                status = COALESCE($9, status),
                description = COALESCE($10, description),
                facilities = COALESCE($11, facilities),
                contact = COALESCE($12, contact)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location_type)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.address)
            .bind(input.capacity)
            .bind(input.occupancy)
            .bind(&input.status)
            .bind(&input.description)
            .bind(&input.facilities)
            .bind(&input.contact)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
