//! Core data types for proposal analysis.

use serde::{Deserialize, Serialize};

use crate::assessment::ProposalAssessment;
use crate::error::AssessmentError;

/// A proposal post lifted out of a forum topic page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalPost {
    /// Topic title, or "Untitled Proposal" when the page carries none.
    pub title: String,

    /// Plain text of the first post, one line per text block.
    pub body: String,

    /// URL the page was fetched from.
    pub source_url: String,
}

impl ProposalPost {
    /// Create a new proposal post.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            source_url: source_url.into(),
        }
    }
}

/// Combined output of one analysis run.
///
/// The two model passes fail independently: a scoring failure leaves
/// the ecosystem narrative intact and vice versa. The ecosystem side
/// never fails outright; its errors arrive as readable text.
#[derive(Debug)]
pub struct AnalysisReport {
    /// The scraped proposal.
    pub post: ProposalPost,

    /// Structured assessment, or why one could not be produced.
    pub assessment: Result<ProposalAssessment, AssessmentError>,

    /// Free-text ecosystem comparison.
    pub ecosystem: String,
}
