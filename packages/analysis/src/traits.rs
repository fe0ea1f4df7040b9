//! Trait seams for the analysis pipeline.
//!
//! The pipeline only touches the network through these two traits, so
//! tests swap in mocks and the server wires in real clients.

use async_trait::async_trait;

use crate::error::{ModelResult, ScrapeResult};

/// Fetches raw HTML for a proposal page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url` and return its body as text.
    ///
    /// A non-success HTTP status is not an error at this layer; the
    /// body comes back regardless and the extractor decides whether it
    /// holds a post.
    async fn fetch_page(&self, url: &str) -> ScrapeResult<String>;
}

/// A chat completion model addressed with a system and user prompt.
///
/// Implementations wrap one provider each and translate its failures
/// into [`crate::error::ModelError`].
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Run one chat completion and return the reply text.
    async fn complete(&self, system: &str, user: &str) -> ModelResult<String>;
}
