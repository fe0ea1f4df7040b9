//! Scoring pass.
//!
//! Sends the proposal to the scoring model with the rubric prompt and
//! parses the reply as a strict-schema assessment.

use tracing::{debug, warn};

use crate::assessment::{parse_assessment, ProposalAssessment};
use crate::error::{AssessmentError, AssessmentResult, ModelError};
use crate::prompts::{format_scoring_prompt, SCORING_SYSTEM_PROMPT};
use crate::traits::ChatModel;

/// Runs the scoring model over a proposal and parses its reply.
pub struct ProposalScorer<M> {
    model: M,
    reply_snippet_len: usize,
}

impl<M: ChatModel> ProposalScorer<M> {
    /// Create a scorer. Malformed replies keep 200 characters of
    /// diagnostics by default.
    pub fn new(model: M) -> Self {
        Self {
            model,
            reply_snippet_len: 200,
        }
    }

    /// Set how much of a malformed reply is kept in errors.
    pub fn with_reply_snippet_len(mut self, len: usize) -> Self {
        self.reply_snippet_len = len;
        self
    }

    /// Score one proposal body.
    ///
    /// A failed model call becomes [`AssessmentError::ApiFailure`] with
    /// the HTTP status when one exists; a reply that is not a valid
    /// assessment becomes [`AssessmentError::MalformedResponse`].
    pub async fn assess(&self, content: &str) -> AssessmentResult<ProposalAssessment> {
        let user = format_scoring_prompt(content);

        let reply = self
            .model
            .complete(SCORING_SYSTEM_PROMPT, &user)
            .await
            .map_err(|e| {
                warn!(error = %e, "Scoring model call failed");
                match e {
                    ModelError::Api { status, body } => AssessmentError::ApiFailure {
                        status: Some(status),
                        message: body,
                    },
                    other => AssessmentError::ApiFailure {
                        status: None,
                        message: other.to_string(),
                    },
                }
            })?;

        debug!(reply_len = reply.len(), "Scoring model replied");

        match parse_assessment(&reply, self.reply_snippet_len) {
            Ok(assessment) => Ok(assessment),
            Err(e) => {
                warn!(error = %e, "Scoring reply rejected");
                Err(e)
            }
        }
    }
}
