//! OpenAI-backed chat model for the scoring pass.

use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError};

use crate::config::ScoringConfig;
use crate::error::{ModelError, ModelResult};
use crate::security::ModelCredentials;
use crate::traits::ChatModel;

/// OpenAI chat completions as a [`ChatModel`].
#[derive(Clone)]
pub struct OpenAiModel {
    client: OpenAIClient,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiModel {
    /// Build the model adapter from credentials and scoring config.
    pub fn new(credentials: &ModelCredentials, config: &ScoringConfig) -> Self {
        let mut client = OpenAIClient::new(credentials.api_key.expose());
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
impl ChatModel for OpenAiModel {
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

fn map_error(e: OpenAIError) -> ModelError {
    match e {
        OpenAIError::Api { status, message } => ModelError::Api {
            status,
            body: message,
        },
        OpenAIError::Network(message) => ModelError::Transport(message),
        OpenAIError::Parse(message) => ModelError::Transport(message),
        OpenAIError::Config(message) => ModelError::Auth(message),
        OpenAIError::EmptyResponse => ModelError::EmptyReply,
    }
}
