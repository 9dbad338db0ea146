//! Role gates layered on [`AuthUser`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ghost_legion_core::error::CoreError;
use ghost_legion_core::roles::Role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Any signed-in user. Used by the write routes of the operational records;
/// reads stay public.
pub struct RequireAuth(pub AuthUser);

/// An administrator. Other roles get 403.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_request_parts(parts, state).await.map(RequireAuth)
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        match user.role {
            Role::Admin => Ok(RequireAdmin(user)),
            Role::User => {
                tracing::debug!(user_id = user.user_id, "Admin route refused");
                Err(AppError::Core(CoreError::Forbidden(
                    "Admin role required".into(),
                )))
            }
        }
    }
}
