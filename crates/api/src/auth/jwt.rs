//! Access and refresh tokens.
//!
//! An access token is an HS256 JWT naming the user and their [`Role`], so
//! authorization never reads the database. A refresh token is an opaque
//! random string handed to the client once; the session table keeps only
//! its SHA-256 digest.

use chrono::{Duration, Utc};
use ghost_legion_core::roles::Role;
use ghost_legion_core::types::DbId;
use jsonwebtoken::errors::Error as JwtError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
    /// Random per-token id, so two tokens minted in the same second differ.
    pub jti: String,
}

/// Signing secret and token lifetimes, read once at startup.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry_mins", &self.access_token_expiry_mins)
            .field("refresh_token_expiry_days", &self.refresh_token_expiry_days)
            .finish()
    }
}

impl JwtConfig {
    /// `JWT_SECRET` is required. `JWT_ACCESS_EXPIRY_MINS` defaults to 15
    /// and `JWT_REFRESH_EXPIRY_DAYS` to 7.
    ///
    /// # Panics
    ///
    /// Panics if the secret is missing or empty, or a lifetime is not an
    /// integer.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.trim().is_empty(), "JWT_SECRET must not be empty");

        let lifetime = |key: &str, default: i64| -> i64 {
            std::env::var(key)
                .map(|raw| {
                    raw.trim()
                        .parse()
                        .unwrap_or_else(|_| panic!("{key} must be a whole number"))
                })
                .unwrap_or(default)
        };

        Self {
            secret,
            access_token_expiry_mins: lifetime("JWT_ACCESS_EXPIRY_MINS", 15),
            refresh_token_expiry_days: lifetime("JWT_REFRESH_EXPIRY_DAYS", 7),
        }
    }

    pub fn access_lifetime(&self) -> Duration {
        Duration::minutes(self.access_token_expiry_mins)
    }

    pub fn refresh_lifetime(&self) -> Duration {
        Duration::days(self.refresh_token_expiry_days)
    }

    /// Mint an access token for `user_id` acting as `role`.
    pub fn issue(&self, user_id: DbId, role: Role) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            role,
            exp: (now + self.access_lifetime()).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Check signature, algorithm and expiry. Tokens naming a role this
    /// build does not know are rejected as malformed.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;
        Ok(data.claims)
    }
}

/// A new refresh token: `plaintext` goes to the client, `hash` to the
/// session row.
pub struct RefreshToken {
    pub plaintext: String,
    pub hash: String,
}

impl RefreshToken {
    pub fn generate() -> Self {
        let plaintext = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
        let hash = Self::digest(&plaintext);
        Self { plaintext, hash }
    }

    /// Lowercase hex SHA-256 of a presented token.
    pub fn digest(token: &str) -> String {
        format!("{:x}", Sha256::digest(token.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        }
    }

    fn sign(claims: &serde_json::Value, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn issued_token_carries_user_and_role() {
        let config = config("field-office-signing-secret");
        let token = config.issue(42, Role::Admin).unwrap();

        let claims = config.verify(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert_ne!(claims.jti, config.verify(&config.issue(42, Role::Admin).unwrap()).unwrap().jti);
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past the default 60-second leeway.
        let now = Utc::now().timestamp();
        let token = sign(
            &serde_json::json!({
                "sub": 1, "role": "user", "exp": now - 300, "iat": now - 600, "jti": "x"
            }),
            "field-office-signing-secret",
        );

        assert!(config("field-office-signing-secret").verify(&token).is_err());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let now = Utc::now().timestamp();
        let token = sign(
            &serde_json::json!({
                "sub": 1, "role": "quartermaster", "exp": now + 300, "iat": now, "jti": "x"
            }),
            "field-office-signing-secret",
        );

        assert!(config("field-office-signing-secret").verify(&token).is_err());
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let token = config("secret-alpha").issue(1, Role::User).unwrap();
        assert!(config("secret-bravo").verify(&token).is_err());
    }

    #[test]
    fn refresh_token_digest_matches_stored_hash() {
        let token = RefreshToken::generate();
        assert_eq!(token.hash, RefreshToken::digest(&token.plaintext));
        assert_eq!(token.hash.len(), 64);
        assert_eq!(token.plaintext.len(), 64);
        assert_ne!(token.plaintext, RefreshToken::generate().plaintext);
    }

    #[test]
    fn debug_output_hides_secret() {
        let rendered = format!("{:?}", config("super-secret-value"));
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("access_token_expiry_mins: 15"));
    }
}
