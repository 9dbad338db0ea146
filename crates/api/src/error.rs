use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ghost_legion_core::error::CoreError;
use serde_json::json;

/// Error type returned by every handler and extractor.
///
/// Domain failures arrive as [`CoreError`]. Store failures must name the
/// attempted action through [`StoreContext`]. There is no
/// `From<sqlx::Error>`: a bare `?` on a query does not compile.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ghost_legion_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store operation that failed while performing `action`.
    ///
    /// Rendered as `"Failed to <action>"`; the cause is logged, never returned.
    #[error("Failed to {action}: {source}")]
    Store {
        action: &'static str,
        source: sqlx::Error,
    },

    /// A server-side failure outside the store (hashing, token signing).
    /// The message is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Attach the attempted action to a store error.
///
/// ```ignore
/// let rows = MapElementRepo::list(&state.pool).await.context("load map elements")?;
/// ```
pub trait StoreContext<T> {
    fn context(self, action: &'static str) -> AppResult<T>;
}

impl<T> StoreContext<T> for Result<T, sqlx::Error> {
    fn context(self, action: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::Store { action, source })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Store { action, source } => classify_sqlx_error(source).unwrap_or_else(|| {
                tracing::error!(error = %source, action, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    format!("Failed to {action}"),
                )
            }),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map the sqlx errors that have a client-facing meaning.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations on `uq_*` constraints map to 409.
///
/// Returns `None` for everything else; callers log and answer 500.
fn classify_sqlx_error(err: &sqlx::Error) -> Option<(StatusCode, &'static str, String)> {
    match err {
        sqlx::Error::RowNotFound => Some((
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        )),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            constraint.starts_with("uq_").then(|| {
                (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                )
            })
        }
        _ => None,
    }
}
