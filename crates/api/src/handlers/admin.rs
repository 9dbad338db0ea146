//! Handlers for `/admin/users` (user management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ghost_legion_core::error::CoreError;
use ghost_legion_core::roles::Role;
use ghost_legion_core::types::DbId;
use ghost_legion_db::models::user::{CreateUser, UpdateUser, UserResponse};
use ghost_legion_db::repositories::{SessionRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult, StoreContext};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `POST /admin/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 64, message = "username must be 3-64 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Minimum length is enforced by `validate_password_strength`.
    pub password: String,
    /// `"admin"` or `"user"`; defaults to `"user"`.
    pub role: Option<String>,
}

/// Body of `PUT /admin/users/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 64, message = "username must be 3-64 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

/// Body of `POST /admin/users/{id}/reset-password`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = parse_role(input.role.as_deref())?.unwrap_or_default();
    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username.trim().to_string(),
            email: input.email.trim().to_string(),
            password_hash: hashed,
            role,
        },
    )
    .await
    .context("create user")?;

    tracing::info!(user_id = user.id, admin_id = admin.user_id, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from_user(&user)?)))
}

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await.context("load users")?;

    let responses = users
        .iter()
        .map(UserResponse::from_user)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(responses))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await
        .context("load user")?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(UserResponse::from_user(&user)?))
}

/// PUT /api/admin/users/{id}
///
/// Profile fields only; passwords go through `reset-password`.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    input.validate()?;

    let user = UserRepo::update(
        &state.pool,
        id,
        &UpdateUser {
            username: input.username.map(|u| u.trim().to_string()),
            email: input.email.map(|e| e.trim().to_string()),
            role: parse_role(input.role.as_deref())?,
            is_active: input.is_active,
        },
    )
    .await
    .context("update user")?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(user_id = id, admin_id = admin.user_id, "User updated");

    Ok(Json(UserResponse::from_user(&user)?))
}

/// DELETE /api/admin/users/{id}
///
/// Sets `is_active = false` and revokes the user's sessions. Repeating it
/// on an inactive account is a no-op. Returns 204 No Content.
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == admin.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "Administrators cannot deactivate their own account".into(),
        )));
    }

    let deactivate = UpdateUser {
        is_active: Some(false),
        ..Default::default()
    };
    UserRepo::update(&state.pool, id, &deactivate)
        .await
        .context("deactivate user")?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let revoked = SessionRepo::revoke_all_for_user(&state.pool, id)
        .await
        .context("revoke sessions")?;
    tracing::info!(user_id = id, admin_id = admin.user_id, revoked, "User deactivated");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/users/{id}/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = UserRepo::set_password(&state.pool, id, &hashed)
        .await
        .context("reset password")?;

    if updated {
        let revoked = SessionRepo::revoke_all_for_user(&state.pool, id)
            .await
            .context("revoke sessions")?;
        tracing::info!(user_id = id, admin_id = admin.user_id, revoked, "Password reset");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// An absent role stays `None`; an unknown name is a validation error.
fn parse_role(name: Option<&str>) -> AppResult<Option<Role>> {
    Ok(name.map(Role::from_name).transpose()?)
}
