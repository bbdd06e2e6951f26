//! REST API client for the admin HTTP endpoints.
//!
//! Wraps the `/api/v1` surface (dashboard creation, user and company
//! lookup) using [`reqwest`].

use serde::Deserialize;
use serde_json::{Map, Value};

use fleetdesk_core::submission::{CreateEndpoint, SubmissionError};
use fleetdesk_core::types::EntityId;

/// HTTP client for a single admin API server.
pub struct AdminApi {
    client: reqwest::Client,
    base_url: String,
}

/// Slim user row as returned by the lookup endpoint. Extra fields in
/// the response are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSummary {
    pub id: EntityId,
    pub email: String,
}

/// Slim company row as returned by the lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanySummary {
    pub id: EntityId,
    pub name: String,
}

/// Errors from the admin REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-provided error message, or the raw body if the
        /// response was not the standard error envelope.
        message: String,
    },
}

impl AdminApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:3000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple servers).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Create a dashboard record.
    ///
    /// Sends a `POST /api/v1/dashboards` request with the given record
    /// and returns the stored row, including its generated id.
    pub async fn create_dashboard(&self, record: &Map<String, Value>) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/v1/dashboards", self.base_url))
            .json(record)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Search users by email prefix.
    ///
    /// Sends a `GET /api/v1/users?q=...` request with paging params.
    pub async fn search_users(
        &self,
        prefix: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UserSummary>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/v1/users", self.base_url))
            .query(&[
                ("q", prefix.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Search companies by name prefix.
    ///
    /// Sends a `GET /api/v1/companies?q=...` request with paging params.
    pub async fn search_companies(
        &self,
        prefix: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CompanySummary>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/v1/companies", self.base_url))
            .query(&[
                ("q", prefix.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Rejected`] with
    /// the server's `error` message (or raw body text) on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from))
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %message, "API request rejected");
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl CreateEndpoint for AdminApi {
    async fn create(&self, record: &Map<String, Value>) -> Result<Value, SubmissionError> {
        self.create_dashboard(record).await.map_err(|err| match err {
            ApiError::Request(e) => SubmissionError::Transport(e.to_string()),
            ApiError::Rejected { status, message } => {
                SubmissionError::Rejected { status, message }
            }
        })
    }
}
