//! Perplexity-backed chat model for the ecosystem pass.

use async_trait::async_trait;
use perplexity_client::{ChatRequest, Message, PerplexityClient, PerplexityError};

use crate::config::EcosystemConfig;
use crate::error::{ModelError, ModelResult};
use crate::security::ModelCredentials;
use crate::traits::ChatModel;

/// Perplexity chat completions as a [`ChatModel`].
///
/// An empty API key is tolerated at construction; the client reports
/// it as an auth failure on the first call.
#[derive(Clone)]
pub struct PerplexityModel {
    client: PerplexityClient,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl PerplexityModel {
    /// Build the model adapter from credentials and ecosystem config.
    pub fn new(credentials: &ModelCredentials, config: &EcosystemConfig) -> Self {
        let mut client = PerplexityClient::new(credentials.api_key.expose());
        if let Some(base_url) = &credentials.base_url {
            client = client.with_base_url(base_url);
        }

        Self {
            client,
            model: credentials.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl ChatModel for PerplexityModel {
    async fn complete(&self, system: &str, user: &str) -> ModelResult<String> {
        let request = ChatRequest::new(&self.model)
            .message(Message::system(system))
            .message(Message::user(user))
            .temperature(self.temperature)
            .max_tokens(self.max_tokens);

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(map_error)?;

        Ok(response.content)
    }
}

fn map_error(e: PerplexityError) -> ModelError {
    match e {
        PerplexityError::Api { status, message } => ModelError::Api {
            status,
            body: message,
        },
        PerplexityError::Auth(message) => ModelError::Auth(message),
        PerplexityError::Config(message) => ModelError::Auth(message),
        PerplexityError::Network(message) => ModelError::Transport(message),
        PerplexityError::Parse(message) => ModelError::Transport(message),
        PerplexityError::EmptyResponse => ModelError::EmptyReply,
    }
}
