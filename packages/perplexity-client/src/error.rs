use thiserror::Error;

/// Errors from the Perplexity client.
#[derive(Error, Debug)]
pub enum PerplexityError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Empty response from Perplexity")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, PerplexityError>;
