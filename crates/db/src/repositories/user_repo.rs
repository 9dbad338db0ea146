//! Repository for the `users` table.
//!
//! Besides the profile columns, each row carries the lockout state used by
//! login: a run of consecutive failures and the instant the lock ends.

use ghost_legion_core::roles::Role;
use ghost_legion_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

const COLUMNS: &str = "id, username, email, password_hash, role_id, is_active, \
                        last_login_at, failed_login_count, locked_until, created_at, updated_at";

pub struct UserRepo;

impl UserRepo {
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role.id())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-sensitive; callers trim the input.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Newest accounts first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Profile edits, role changes and (de)activation. `None` fields keep
    /// their value; an unknown id yields `None`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                username = COALESCE($2, username),
                email = COALESCE($3, email),
                role_id = COALESCE($4, role_id),
                is_active = COALESCE($5, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(input.role.map(Role::id))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Count a wrong password. The failure that completes a run of
    /// `lock_after` locks the account until `lock_until` and starts the
    /// next run from zero.
    ///
    /// Returns `true` when this call engaged the lock.
    pub async fn record_failed_login(
        pool: &PgPool,
        id: DbId,
        lock_after: i32,
        lock_until: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let (locked,): (bool,) = sqlx::query_as(
            "WITH attempt AS (
                SELECT id, failed_login_count + 1 >= $2 AS locks FROM users WHERE id = $1
             )
             UPDATE users u SET
                failed_login_count = CASE WHEN a.locks THEN 0 ELSE u.failed_login_count + 1 END,
                locked_until = CASE WHEN a.locks THEN $3 ELSE u.locked_until END
             FROM attempt a
             WHERE u.id = a.id
             RETURNING a.locks",
        )
        .bind(id)
        .bind(lock_after)
        .bind(lock_until)
        .fetch_one(pool)
        .await?;
        Ok(locked)
    }

    /// Clear the failure run and any lock, and stamp `last_login_at`.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                failed_login_count = 0,
                locked_until = NULL,
                last_login_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Replace the password hash. A reset also lifts any lockout.
    pub async fn set_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET
                password_hash = $2,
                failed_login_count = 0,
                locked_until = NULL
             WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
