//! REST client for the Ghost Legion API.
//!
//! Wraps the map-element endpoints and login using [`reqwest`]. Writes carry
//! the access token obtained from [`ApiClient::login`] (or set directly with
//! [`ApiClient::with_token`]).

use async_trait::async_trait;
use ghost_legion_core::map_element::MapElementDraft;
use ghost_legion_core::types::DbId;
use serde::Deserialize;

use crate::backend::MapElementBackend;
use crate::error::ClientError;
use crate::models::{MapElement, MapElementPatch};

/// HTTP client for one Ghost Legion server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiClient {
    /// * `base_url` - server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `POST /api/auth/login`; keeps the access token for later writes.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;

        let body: LoginResponse = Self::parse_response(response).await?;
        self.token = Some(body.access_token);
        tracing::debug!(username, "Logged in");
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::NotAuthenticated)
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into [`ClientError::Api`], preferring the
    /// server's `error` message over the raw body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MapElementBackend for ApiClient {
    async fn list(&self) -> Result<Vec<MapElement>, ClientError> {
        let response = self
            .client
            .get(self.url("/api/map-elements"))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn create(&self, draft: &MapElementDraft) -> Result<MapElement, ClientError> {
        let response = self
            .client
            .post(self.url("/api/map-elements"))
            .bearer_auth(self.bearer()?)
            .json(draft)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update(&self, id: DbId, patch: &MapElementPatch) -> Result<MapElement, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/api/map-elements/{id}")))
            .bearer_auth(self.bearer()?)
            .json(patch)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/map-elements/{id}")))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
