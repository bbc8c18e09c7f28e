//! HTTP client for the Aptoide search API.

use std::time::Duration;

use reqwest::StatusCode;

use crate::aptoide::types::SearchResponse;
use crate::error::AppError;

/// Production search endpoint.
pub const APTOIDE_SEARCH_URL: &str = "https://ws75.aptoide.com/api/7/apps/search";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for querying the Aptoide apps search API.
#[derive(Debug, Clone)]
pub struct AptoideClient {
    client: reqwest::Client,
    search_url: String,
}

impl AptoideClient {
    /// Creates a client targeting the production Aptoide endpoint.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            search_url: APTOIDE_SEARCH_URL.to_string(),
        }
    }

    /// Overrides the search endpoint URL.
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Searches Aptoide for apps matching the given package name.
    ///
    /// Any transport failure (refused connection, timeout, malformed
    /// body) surfaces as [`AppError::RemoteUnavailable`]; a non-200
    /// response becomes [`AppError::RemoteStatus`].
    pub async fn search(&self, package_name: &str) -> Result<SearchResponse, AppError> {
        tracing::debug!(package_name, url = %self.search_url, "Querying Aptoide search API");

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("query", package_name)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "Aptoide returned an error status");
            return Err(AppError::RemoteStatus(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

impl Default for AptoideClient {
    fn default() -> Self {
        Self::new()
    }
}
