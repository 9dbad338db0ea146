//! Handlers for the `/auth` resource.
//!
//! Access tokens are short-lived JWTs. Each login opens a session row that
//! backs an opaque refresh token; refreshing rotates it.

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{Duration, Utc};
use ghost_legion_core::error::CoreError;
use ghost_legion_core::roles::Role;
use ghost_legion_core::types::DbId;
use ghost_legion_db::models::session::CreateSession;
use ghost_legion_db::models::user::{User, UserResponse};
use ghost_legion_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::RefreshToken;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult, StoreContext};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Consecutive wrong passwords that lock the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

const LOCK_DURATION_MINS: i64 = 15;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned by login and refresh.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// A freshly minted token pair plus the session row that backs it.
struct IssuedTokens {
    access_token: String,
    refresh_token: String,
    session: CreateSession,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

fn invalid_refresh_token() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid or expired refresh token".into(),
    ))
}

fn deactivated() -> AppError {
    AppError::Core(CoreError::Forbidden("Account is deactivated".into()))
}

/// POST /api/auth/login
///
/// Unknown usernames and wrong passwords get the same 401. Deactivated and
/// locked accounts get 403.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, input.username.trim())
        .await
        .context("look up account")?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err(deactivated());
    }

    if user.is_locked(Utc::now()) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is temporarily locked. Try again later.".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        let lock_until = Utc::now() + Duration::minutes(LOCK_DURATION_MINS);
        let locked =
            UserRepo::record_failed_login(&state.pool, user.id, MAX_FAILED_ATTEMPTS, lock_until)
                .await
                .context("record failed login")?;
        if locked {
            tracing::warn!(user_id = user.id, until = %lock_until, "Account locked after failed logins");
        }
        return Err(invalid_credentials());
    }

    UserRepo::record_successful_login(&state.pool, user.id)
        .await
        .context("record login")?;
    let role = user.role()?;

    let issued = issue_tokens(&state, &user, role, &headers)?;
    SessionRepo::create(&state.pool, &issued.session)
        .await
        .context("open session")?;

    tracing::info!(user_id = user.id, role = %role, "User logged in");

    Ok(Json(auth_response(&state, issued, &user, role)))
}

/// POST /api/auth/refresh
///
/// Rotates the refresh token. The presented token stops working whether or
/// not the caller receives the new pair.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = RefreshToken::digest(&input.refresh_token);

    let session = SessionRepo::find_active_by_hash(&state.pool, &token_hash)
        .await
        .context("look up session")?
        .ok_or_else(invalid_refresh_token)?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await
        .context("look up account")?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(deactivated());
    }

    // Role changes made since the last refresh take effect here.
    let role = user.role()?;

    let issued = issue_tokens(&state, &user, role, &headers)?;
    SessionRepo::rotate(&state.pool, session.id, &issued.session)
        .await
        .context("rotate session")?
        .ok_or_else(invalid_refresh_token)?;

    tracing::debug!(user_id = user.id, previous_session = session.id, "Session rotated");

    Ok(Json(auth_response(&state, issued, &user, role)))
}

/// POST /api/auth/logout
///
/// Revoke every session of the caller. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id)
        .await
        .context("revoke sessions")?;
    tracing::info!(user_id = auth_user.user_id, revoked, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await
        .context("look up account")?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(UserResponse::from_user(&user)?))
}

fn issue_tokens(
    state: &AppState,
    user: &User,
    role: Role,
    headers: &HeaderMap,
) -> AppResult<IssuedTokens> {
    let access_token = state
        .config
        .jwt
        .issue(user.id, role)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let refresh = RefreshToken::generate();

    Ok(IssuedTokens {
        access_token,
        refresh_token: refresh.plaintext,
        session: CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh.hash,
            expires_at: Utc::now() + state.config.jwt.refresh_lifetime(),
            user_agent: header_text(headers, USER_AGENT.as_str()),
            ip_address: header_text(headers, "x-forwarded-for")
                .and_then(|hops| hops.split(',').next().map(|ip| ip.trim().to_string()))
                .filter(|ip| !ip.is_empty()),
        },
    })
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn auth_response(state: &AppState, issued: IssuedTokens, user: &User, role: Role) -> AuthResponse {
    AuthResponse {
        access_token: issued.access_token,
        refresh_token: issued.refresh_token,
        expires_in: state.config.jwt.access_lifetime().num_seconds(),
        user: UserInfo {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role,
        },
    }
}
