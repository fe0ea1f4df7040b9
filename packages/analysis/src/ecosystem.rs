//! Ecosystem comparison pass.
//!
//! Asks the ecosystem model how a proposal stacks up against prior
//! ones. This pass is advisory and never fails the analysis: every
//! failure mode folds into the returned narrative as readable text.

use tracing::{debug, warn};

use crate::error::ModelError;
use crate::prompts::{format_ecosystem_prompt, ECOSYSTEM_SYSTEM_PROMPT};
use crate::traits::ChatModel;

/// Produces a free-text ecosystem comparison for a proposal.
pub struct EcosystemAnalyst<M> {
    model: M,
}

impl<M: ChatModel> EcosystemAnalyst<M> {
    /// Create an analyst around a chat model.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Get the comparison narrative for one proposal body.
    ///
    /// HTTP-level API errors surface as
    /// `Error: Could not get ecosystem analysis (HTTP <status>): <body>`;
    /// everything else as `Error getting ecosystem analysis: <error>`.
    pub async fn compare(&self, content: &str) -> String {
        let user = format_ecosystem_prompt(content);

        match self.model.complete(ECOSYSTEM_SYSTEM_PROMPT, &user).await {
            Ok(reply) => {
                debug!(reply_len = reply.len(), "Ecosystem model replied");
                reply
            }
            Err(ModelError::Api { status, body }) => {
                warn!(status = status, error = %body, "Ecosystem API error");
                format!(
                    "Error: Could not get ecosystem analysis (HTTP {}): {}",
                    status, body
                )
            }
            Err(e) => {
                warn!(error = %e, "Ecosystem analysis failed");
                format!("Error getting ecosystem analysis: {}", e)
            }
        }
    }
}
