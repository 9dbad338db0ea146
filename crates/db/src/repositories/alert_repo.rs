//! Repository for the `alerts` table.

use ghost_legion_core::types::DbId;
use sqlx::PgPool;

use crate::models::alert::{Alert, CreateAlert, UpdateAlert};

const COLUMNS: &str = "id, title, message, severity, status, region, expires_at, created_by, \
                        created_at, updated_at";

pub struct AlertRepo;

impl AlertRepo {
    /// Newest first, optionally restricted to one canonical status.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alerts
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateAlert) -> Result<Alert, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts (title, message, severity, status, region, expires_at, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(&input.title)
            .bind(&input.message)
            .bind(&input.severity)
            .bind(&input.status)
            .bind(&input.region)
            .bind(input.expires_at)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAlert,
    ) -> Result<Option<Alert>, sqlx::Error> {
        let query = format!(
            "UPDATE alerts SET
                title = COALESCE($2, title),
                message = COALESCE($3, message),
                severity = COALESCE($4, severity),
                status = COALESCE($5, status),
                region = COALESCE($6, region),
                expires_at = COALESCE($7, expires_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.message)
            .bind(&input.severity)
            .bind(&input.status)
            .bind(&input.region)
            .bind(input.expires_at)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM alerts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
