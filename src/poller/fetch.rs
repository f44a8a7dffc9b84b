//! Fetching the version document.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::poller::error::{PollerError, PollerResult};

/// JSON document served alongside the deployed application.
///
/// Only `version` matters to the poller; extra fields such as `buildTime`
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionDocument {
    pub version: String,
}

/// Source of the latest published version.
///
/// The production implementation is [`HttpVersionFetcher`]; tests inject
/// scripted implementations.
#[async_trait]
pub trait VersionFetch: Send + Sync {
    async fn latest_version(&self) -> PollerResult<String>;
}

/// Fetches the version document over HTTP with caching disabled.
pub struct HttpVersionFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpVersionFetcher {
    pub fn new(url: impl Into<String>) -> PollerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| PollerError::Fetch {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl VersionFetch for HttpVersionFetcher {
    async fn latest_version(&self) -> PollerResult<String> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .header(reqwest::header::PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| PollerError::Fetch {
                reason: e.to_string(),
            })?
            .error_for_status()
            .map_err(|e| PollerError::Fetch {
                reason: e.to_string(),
            })?;

        let document: VersionDocument =
            response.json().await.map_err(|e| PollerError::Parse {
                reason: e.to_string(),
            })?;
        Ok(document.version)
    }
}
