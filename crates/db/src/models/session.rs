use ghost_legion_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// One refresh-token session. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    /// `User-Agent` of the client that logged in or last refreshed.
    pub user_agent: Option<String>,
    /// First hop of `X-Forwarded-For`, when the server sits behind a proxy.
    pub ip_address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}
