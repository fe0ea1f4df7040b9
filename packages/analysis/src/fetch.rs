//! HTTP page fetcher.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::error::{ScrapeError, ScrapeResult};
use crate::traits::PageFetcher;

/// Fetches forum pages over HTTP with a browser-style user agent.
///
/// Error pages still carry parseable HTML, so the status code is
/// recorded but never turned into an error here; a page without post
/// content fails later in extraction.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a fetcher with default settings.
    pub fn new() -> Self {
        Self::with_config(&FetchConfig::default())
    }

    /// Create a fetcher from a config.
    pub fn with_config(config: &FetchConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            client: builder.build().expect("Failed to create HTTP client"),
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> ScrapeResult<String> {
        debug!(url = %url, "HTTP fetch starting");

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                ScrapeError::Network {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let html = response.text().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to read response body");
            ScrapeError::Network {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        debug!(url = %url, status = %status, content_length = html.len(), "Page fetched");

        Ok(html)
    }
}
