//! Typed errors for the analysis library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to keep failures
//! strongly typed per pipeline stage.

use thiserror::Error;

/// Errors that can occur while fetching and parsing a proposal page.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP request failed before a body could be read
    #[error("fetch failed for {url}: {message}")]
    Network { url: String, message: String },

    /// Page was fetched but contains no post content
    #[error("no post content found at {url}")]
    ContentNotFound { url: String },
}

/// Errors from a single chat model call.
///
/// `Clone` so mocks can hand out canned failures repeatedly.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Request could not be sent or the reply body could not be read
    #[error("transport error: {0}")]
    Transport(String),

    /// Provider returned a non-success HTTP status
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// Credentials missing or rejected before any request was made
    #[error("auth error: {0}")]
    Auth(String),

    /// Provider replied with a well-formed envelope holding no content
    #[error("model returned an empty reply")]
    EmptyReply,
}

/// Why a scoring pass produced no usable assessment.
///
/// Transport-level failures and malformed model output are kept apart so
/// callers can tell "the API was down" from "the model ignored the
/// output contract".
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// The scoring model call itself failed
    #[error("assessment request failed: {message}")]
    ApiFailure { status: Option<u16>, message: String },

    /// The model replied but the reply is not a valid assessment
    #[error("malformed assessment ({reason})")]
    MalformedResponse { reason: String, snippet: String },
}

/// Result type alias for scrape operations.
pub type ScrapeResult<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for model calls.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Result type alias for assessment operations.
pub type AssessmentResult<T> = std::result::Result<T, AssessmentError>;
