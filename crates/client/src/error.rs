use ghost_legion_core::error::CoreError;

/// Errors from the client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// The `error` field of the server's JSON body, or the raw body.
        message: String,
    },

    /// Input rejected locally before any request was made.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// A write was attempted without logging in first.
    #[error("Not logged in")]
    NotAuthenticated,
}

impl ClientError {
    /// HTTP status for server-side rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
