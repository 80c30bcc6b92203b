//! HTTP client for the Planora backend.
//!
//! One [`ApiClient`] is shared across the whole application (cheap `Clone`
//! via `Arc`). Accessors are grouped per entity in the submodules; they all
//! funnel through the request helpers here, which attach the project API
//! key, a per-request correlation id, and the configured timeout.
//!
//! The backend is the single source of truth. The client never persists
//! anything: every accessor result is a transient copy that callers hold in
//! loaders or stores and overwrite wholesale on the next call.

mod agents;
mod bookings;
pub(crate) mod envelope;
mod locations;
pub mod params;
mod services;
mod users;

pub use agents::NewAgent;
pub use bookings::NewBooking;
pub use envelope::Page;
pub use locations::NewLocation;
pub use services::NewService;
pub use users::NewUser;

use std::sync::Arc;

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::config::BackendConfig;
use crate::error::ApiError;

/// Maximum number of error-body bytes kept for diagnostics.
const MAX_ERROR_BODY: usize = 2048;

/// Client for the Planora backend API.
///
/// Provides typed access to users, agents, bookings, locations, services,
/// and categories. All methods are `async` and safe to call concurrently.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    project_id: String,
    api_key: SecretString,
    timeout: std::time::Duration,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("project_id", &self.inner.project_id)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client from a backend configuration.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                project_id: config.project_id.clone(),
                api_key: config.api_key.clone(),
                timeout: config.timeout,
            }),
        }
    }

    /// Build the absolute URL for an entity path.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/v1/projects/{}/{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            self.inner.project_id,
            path
        )
    }

    /// GET a JSON value; non-success statuses are errors.
    pub(crate) async fn get_value(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Value, ApiError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, path, "backend GET");

        let response = self
            .inner
            .client
            .get(self.endpoint(path))
            .query(query)
            .bearer_auth(self.inner.api_key.expose_secret())
            .header("X-Request-Id", request_id.to_string())
            .timeout(self.inner.timeout)
            .send()
            .await?;

        Self::into_value(response).await
    }

    /// GET a JSON value; 404 becomes `Ok(None)`.
    pub(crate) async fn get_optional_value(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, path, "backend GET");

        let response = self
            .inner
            .client
            .get(self.endpoint(path))
            .bearer_auth(self.inner.api_key.expose_secret())
            .header("X-Request-Id", request_id.to_string())
            .timeout(self.inner.timeout)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Self::into_value(response).await.map(Some)
    }

    /// Send a JSON body and return the JSON response value.
    pub(crate) async fn send_value<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, %method, path, "backend write");

        let response = self
            .inner
            .client
            .request(method, self.endpoint(path))
            .bearer_auth(self.inner.api_key.expose_secret())
            .header("X-Request-Id", request_id.to_string())
            .timeout(self.inner.timeout)
            .json(body)
            .send()
            .await?;

        Self::into_value(response).await
    }

    /// DELETE an entity; the backend answers with an empty body or a
    /// `success` envelope.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, path, "backend DELETE");

        let response = self
            .inner
            .client
            .delete(self.endpoint(path))
            .bearer_auth(self.inner.api_key.expose_secret())
            .header("X-Request-Id", request_id.to_string())
            .timeout(self.inner.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, body));
        }

        let body = response.text().await.unwrap_or_default();
        if body.trim().is_empty() {
            return Ok(());
        }

        let value: Value = serde_json::from_str(&body)?;
        if value.get("success").and_then(Value::as_bool) == Some(false) {
            let message = value
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ApiError::Backend(message));
        }

        Ok(())
    }

    async fn into_value(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, body));
        }

        Ok(response.json().await?)
    }

    fn status_error(status: reqwest::StatusCode, body: String) -> ApiError {
        // Truncate on a char boundary; error bodies may be localized text.
        let body = body.chars().take(MAX_ERROR_BODY).collect();
        ApiError::Status {
            status: status.as_u16(),
            body,
        }
    }
}
