//! First-start admin account.

use ghost_legion_core::error::CoreError;
use ghost_legion_core::roles::Role;
use ghost_legion_db::models::user::CreateUser;
use ghost_legion_db::repositories::UserRepo;
use ghost_legion_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult, StoreContext};

/// Create the configured admin account unless a user with that name exists.
///
/// Returns `true` when an account was created. An existing account is left
/// untouched, password included.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, &admin.username)
        .await
        .context("look up bootstrap admin")?
        .is_some()
    {
        tracing::debug!(username = %admin.username, "Bootstrap admin already present");
        return Ok(false);
    }

    validate_password_strength(&admin.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            role: Role::Admin,
        },
    )
    .await
    .context("create bootstrap admin")?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
    Ok(true)
}
