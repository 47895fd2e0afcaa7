//! The remote document client: the four primitives the backend needs from a
//! pod server, and the HTTP implementation.
//!
//! Failures are opaque at this layer. The backend does not distinguish a
//! missing document from a network fault or a denied request; both surface
//! as `Fetch`/`Write` with the URI.

use async_trait::async_trait;
use pixpod_core::{Error, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE, LINK, LOCATION};
use std::time::Duration;

pub const TURTLE_CONTENT_TYPE: &str = "text/turtle";

const LDP_BASIC_CONTAINER_LINK: &str =
    "<http://www.w3.org/ns/ldp#BasicContainer>; rel=\"type\"";

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upper bound on every remote call; a hung pod cannot hang the backend.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("pixpod/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Load from environment variables, with defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: std::env::var("PIXPOD_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            user_agent: std::env::var("PIXPOD_USER_AGENT")
                .unwrap_or(defaults.user_agent),
        }
    }
}

// ============================================================================
// Client interface
// ============================================================================

/// Remote access to pod documents.
#[async_trait]
pub trait DocumentClient: Send + Sync {
    /// Fetch a document's text.
    async fn load(&self, uri: &str) -> Result<String>;

    /// Create a resource with the given body; returns the actual URI.
    async fn create(&self, uri: &str, body: Vec<u8>, content_type: &str) -> Result<String>;

    /// Replace a document's content; returns the actual URI.
    async fn write(&self, uri: &str, body: String) -> Result<String>;

    /// Create a collection (folder); returns the actual URI.
    async fn create_collection(&self, uri: &str) -> Result<String>;
}

// ============================================================================
// HTTP implementation
// ============================================================================

pub struct HttpDocumentClient {
    http: reqwest::Client,
}

impl HttpDocumentClient {
    pub fn new(config: &ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");
        Self { http }
    }

    fn actual_uri(response: &reqwest::Response, requested: &str) -> String {
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| requested.to_string())
    }
}

impl Default for HttpDocumentClient {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

#[async_trait]
impl DocumentClient for HttpDocumentClient {
    async fn load(&self, uri: &str) -> Result<String> {
        let response = self
            .http
            .get(uri)
            .header(ACCEPT, TURTLE_CONTENT_TYPE)
            .send()
            .await
            .map_err(|err| {
                tracing::debug!(uri = %uri, error = %err, "document fetch failed");
                Error::fetch(uri)
            })?;
        if !response.status().is_success() {
            tracing::debug!(uri = %uri, status = %response.status(), "document fetch rejected");
            return Err(Error::fetch(uri));
        }
        response.text().await.map_err(|err| {
            tracing::debug!(uri = %uri, error = %err, "document body read failed");
            Error::fetch(uri)
        })
    }

    async fn create(&self, uri: &str, body: Vec<u8>, content_type: &str) -> Result<String> {
        let response = self
            .http
            .put(uri)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|err| {
                tracing::debug!(uri = %uri, error = %err, "resource creation failed");
                Error::write(uri)
            })?;
        if !response.status().is_success() {
            tracing::debug!(uri = %uri, status = %response.status(), "resource creation rejected");
            return Err(Error::write(uri));
        }
        Ok(Self::actual_uri(&response, uri))
    }

    async fn write(&self, uri: &str, body: String) -> Result<String> {
        self.create(uri, body.into_bytes(), TURTLE_CONTENT_TYPE)
            .await
    }

    async fn create_collection(&self, uri: &str) -> Result<String> {
        let response = self
            .http
            .put(uri)
            .header(LINK, LDP_BASIC_CONTAINER_LINK)
            .header(CONTENT_TYPE, TURTLE_CONTENT_TYPE)
            .send()
            .await
            .map_err(|err| {
                tracing::debug!(uri = %uri, error = %err, "collection creation failed");
                Error::write(uri)
            })?;
        if !response.status().is_success() {
            tracing::debug!(uri = %uri, status = %response.status(), "collection creation rejected");
            return Err(Error::write(uri));
        }
        Ok(Self::actual_uri(&response, uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_bounded() {
        let config = ClientConfig::default();
        assert!(config.timeout_secs > 0);
        assert!(config.user_agent.starts_with("pixpod/"));
    }
}
