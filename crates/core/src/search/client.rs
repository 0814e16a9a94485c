//! Search page client.
//!
//! Fetches one page of search results and hands the body to the extractor.
//! One GET, no retries: transient failures are the orchestrator's problem.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::SearchConfig;

use super::extractor::parse_results;
use super::types::{SearchError, TorrentCandidate};

/// Trait for search result providers.
#[async_trait]
pub trait ReleaseSearcher: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Search for a free-text term and return extracted candidates in
    /// page order (unranked).
    async fn search(&self, term: &str) -> Result<Vec<TorrentCandidate>, SearchError>;
}

/// Client for the pirate-bay style search page.
pub struct PirateBayClient {
    client: Client,
    config: SearchConfig,
}

impl PirateBayClient {
    /// Create a new client from configuration.
    pub fn new(config: SearchConfig) -> Self {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs as u64));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Search for an album release as "<artist> <album>".
    pub async fn search_album(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<Vec<TorrentCandidate>, SearchError> {
        self.search(&format!("{artist} {album}")).await
    }

    /// The fixed search URL scheme of the page: category 100 (audio),
    /// first result page.
    fn search_url(&self, term: &str) -> String {
        format!(
            "{}/search/{}/0/7/0",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(term)
        )
    }

    async fn fetch(&self, term: &str) -> Result<String, SearchError> {
        let url = self.search_url(term);
        debug!(url = %url, "fetching search page");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout
            } else if e.is_connect() {
                SearchError::ConnectionFailed(e.to_string())
            } else {
                SearchError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))
    }
}

#[async_trait]
impl ReleaseSearcher for PirateBayClient {
    fn name(&self) -> &str {
        "piratebay"
    }

    async fn search(&self, term: &str) -> Result<Vec<TorrentCandidate>, SearchError> {
        let body = self.fetch(term).await?;
        // ContainerNotFound propagates unchanged; the orchestrator turns
        // it into "no results" rather than an internal error.
        let candidates = parse_results(&body)?;
        debug!(term = %term, count = candidates.len(), "extracted candidates");
        Ok(candidates)
    }
}
