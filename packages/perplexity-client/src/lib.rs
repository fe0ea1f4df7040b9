//! Pure Perplexity REST API client.
//!
//! A minimal client for the Perplexity chat completions API. Perplexity
//! speaks the OpenAI wire dialect, so the request and response shapes
//! mirror it.
//!
//! # Example
//!
//! ```rust,ignore
//! use perplexity_client::{PerplexityClient, ChatRequest, Message};
//!
//! let client = PerplexityClient::new("pplx-token");
//!
//! let reply = client.chat_completion(
//!     ChatRequest::new("sonar-pro")
//!         .message(Message::system("You are an evaluator."))
//!         .message(Message::user("Compare this proposal."))
//!         .temperature(0.7)
//!         .max_tokens(2000),
//! ).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{PerplexityError, Result};
pub use types::{ChatRequest, ChatResponse, Message, Usage};

use reqwest::Client;
use tracing::{debug, warn};

const BASE_URL: &str = "https://api.perplexity.ai";

/// Pure Perplexity API client.
#[derive(Clone)]
pub struct PerplexityClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl PerplexityClient {
    /// Create a new Perplexity client with the given API key.
    ///
    /// An empty key is accepted here; calls on such a client fail with
    /// [`PerplexityError::Auth`] before any request is sent.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `PPLX_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("PPLX_API_KEY")
            .map_err(|_| PerplexityError::Config("PPLX_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Returns the first choice's content. A non-2xx response becomes
    /// [`PerplexityError::Api`] carrying the HTTP status and the response
    /// body text; a 2xx response with no choices becomes
    /// [`PerplexityError::EmptyResponse`].
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        if self.api_key.is_empty() {
            return Err(PerplexityError::Auth("Perplexity API key is not set".into()));
        }

        let start = std::time::Instant::now();

        let resp = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Perplexity request failed");
                PerplexityError::Network(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "Perplexity API error");
            return Err(PerplexityError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let chat_response: types::ChatResponseRaw = resp
            .json()
            .await
            .map_err(|e| PerplexityError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(PerplexityError::EmptyResponse)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Perplexity chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }
}
