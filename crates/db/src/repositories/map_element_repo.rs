//! Repository for the `map_elements` table.

use ghost_legion_core::types::DbId;
use sqlx::PgPool;

use crate::models::map_element::{CreateMapElement, MapElement, UpdateMapElement};

const COLUMNS: &str = "id, element_type, coordinates, color, size, label, description, \
                        category, risk, created_by, created_at, updated_at";

/// CRUD for drawn map annotations.
pub struct MapElementRepo;

impl MapElementRepo {
    /// All elements, newest first. Ties on `created_at` fall back to id.
    pub async fn list(pool: &PgPool) -> Result<Vec<MapElement>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM map_elements ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, MapElement>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MapElement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM map_elements WHERE id = $1");
        sqlx::query_as::<_, MapElement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateMapElement,
    ) -> Result<MapElement, sqlx::Error> {
        let query = format!(
            "INSERT INTO map_elements
                (element_type, coordinates, color, size, label, description, category, risk, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MapElement>(&query)
            .bind(&input.element_type)
            .bind(&input.coordinates)
            .bind(&input.color)
            .bind(input.size)
            .bind(&input.label)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.risk)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Partial update; `updated_at` is refreshed by trigger even when every
    /// field is `None`. Returns `None` for an unknown id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMapElement,
    ) -> Result<Option<MapElement>, sqlx::Error> {
        let query = format!(
            "UPDATE map_elements SET
                coordinates = COALESCE($2, coordinates),
                color = COALESCE($3, color),
                size = COALESCE($4, size),
                label = COALESCE($5, label),
                description = COALESCE($6, description),
                category = COALESCE($7, category),
                risk = COALESCE($8, risk)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MapElement>(&query)
            .bind(id)
            .bind(&input.coordinates)
            .bind(&input.color)
            .bind(input.size)
            .bind(&input.label)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.risk)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM map_elements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
