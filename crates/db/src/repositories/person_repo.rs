//! Repository for the `personnel` table.

use ghost_legion_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

const COLUMNS: &str = "id, name, role, status, email, phone, location, skills, notes, \
                        created_at, updated_at";

pub struct PersonRepo;

impl PersonRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO personnel (name, role, status, email, phone, location, skills, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.status)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(&input.skills)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE personnel SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                status = COALESCE($4, status),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                location = COALESCE($7, location),
                skills = COALESCE($8, skills),
                notes = COALESCE($9, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.status)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(&input.skills)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM personnel WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
