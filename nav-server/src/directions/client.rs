//! Google Directions HTTP client.
//!
//! One request in, one parsed response out. There is no retry and no
//! caching; transport failures are returned to the caller as-is.

use std::fmt;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;

use super::error::DirectionsError;
use super::options::{DIRECTIONS_URL, RouteQuery, build_url};
use super::types::DirectionsResponse;

/// Anything that can answer a directions query.
///
/// Implemented by the live [`DirectionsClient`] and by
/// [`MockDirectionsClient`](super::MockDirectionsClient).
pub trait DirectionsProvider: Send + Sync {
    fn directions<'a>(
        &'a self,
        query: &'a RouteQuery,
    ) -> BoxFuture<'a, Result<DirectionsResponse, DirectionsError>>;
}

/// Configuration for the directions client.
#[derive(Clone)]
pub struct DirectionsConfig {
    /// API key appended to every request
    pub api_key: String,
    /// Endpoint URL (defaults to Google Directions JSON)
    pub base_url: String,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DIRECTIONS_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom endpoint (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Directions API client.
#[derive(Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        if config.api_key.is_empty() {
            return Err(DirectionsError::NotConfigured(
                "directions API key is empty".to_string(),
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Request directions for a query.
    ///
    /// The upstream reports geocoding and routing failures inside a 200
    /// response, so a successful return does not mean a route was found.
    pub async fn fetch(&self, query: &RouteQuery) -> Result<DirectionsResponse, DirectionsError> {
        let url = build_url(&self.base_url, query, &self.api_key);

        debug!(
            origin = %query.origin,
            destination = %query.destination,
            options = query.options.len(),
            "requesting directions"
        );

        // The URL carries the API key, keep it out of error messages.
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DirectionsError::Http(e.without_url()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectionsError::Http(e.without_url()))?;

        serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl fmt::Debug for DirectionsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DirectionsProvider for DirectionsClient {
    fn directions<'a>(
        &'a self,
        query: &'a RouteQuery,
    ) -> BoxFuture<'a, Result<DirectionsResponse, DirectionsError>> {
        self.fetch(query).boxed()
    }
}
