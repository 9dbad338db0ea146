//! Repository for the `resources` table.

use ghost_legion_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::{CreateResource, Resource, UpdateResource};

const COLUMNS: &str = "id, name, resource_type, quantity, unit, location, status, \
                        minimum_quantity, created_at, updated_at";

pub struct ResourceRepo;

impl ResourceRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Resource>(&query).fetch_all(pool).await
    }

    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources
                (name, resource_type, quantity, unit, location, status, minimum_quantity)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(&input.name)
            .bind(&input.resource_type)
            .bind(input.quantity)
            .bind(&input.unit)
            .bind(&input.location)
            .bind(&input.status)
            .bind(input.minimum_quantity)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResource,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET
                name = COALESCE($2, name),
                resource_type = COALESCE($3, resource_type),
                quantity = COALESCE($4, quantity),
                unit = COALESCE($5, unit),
                location = COALESCE($6, location),
                status = COALESCE($7, status),
                minimum_quantity = COALESCE($8, minimum_quantity)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.resource_type)
            .bind(input.quantity)
            .bind(&input.unit)
            .bind(&input.location)
            .bind(&input.status)
            .bind(input.minimum_quantity)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
