//! HTTP client for the hospital's public directory endpoints.
//!
//! Two reads, no auth, no parameters:
//! - `GET {base_url}/departments/`
//! - `GET {base_url}/doctors/`
//!
//! The `DirectoryProvider` trait is the seam between the cache and the
//! network so tests can drive the cache with fakes.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::AssistantConfig;
use crate::models::{Department, Doctor};

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

/// Errors from directory fetches.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Cannot reach the hospital API at {0}")]
    Connection(String),
    #[error("Directory request timed out after {0}s")]
    Timeout(u64),
    #[error("Directory request failed: HTTP {status}")]
    Status { status: u16 },
    #[error("Failed to parse directory response: {0}")]
    ResponseParsing(String),
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

// ═══════════════════════════════════════════════════════════
// Provider seam
// ═══════════════════════════════════════════════════════════

/// Source of directory reference data.
///
/// The production implementation is `DirectoryApi`; tests inject fakes
/// with canned departments/doctors and call counters.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    async fn fetch_departments(&self) -> Result<Vec<Department>, DirectoryError>;
    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, DirectoryError>;
}

// ═══════════════════════════════════════════════════════════
// DirectoryApi
// ═══════════════════════════════════════════════════════════

/// Reqwest-backed client for the hospital REST API.
pub struct DirectoryApi {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl DirectoryApi {
    /// Create a client pointing at `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs: timeout.as_secs(),
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(&config.api_base_url, config.http_timeout)
    }

    /// Endpoint URL for a collection, DRF-style trailing slash included.
    fn endpoint(&self, collection: &str) -> String {
        format!("{}/{}/", self.base_url, collection)
    }

    async fn get_json<T: DeserializeOwned>(&self, collection: &str) -> Result<T, DirectoryError> {
        let url = self.endpoint(collection);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                DirectoryError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                DirectoryError::Timeout(self.timeout_secs)
            } else {
                DirectoryError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DirectoryError::ResponseParsing(e.to_string()))
    }
}

#[async_trait]
impl DirectoryProvider for DirectoryApi {
    async fn fetch_departments(&self) -> Result<Vec<Department>, DirectoryError> {
        self.get_json("departments").await
    }

    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, DirectoryError> {
        self.get_json("doctors").await
    }
}
