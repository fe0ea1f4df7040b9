//! Shared application state.

use std::sync::Arc;
use tokio::sync::RwLock;

use analysis::{
    HttpFetcher, OpenAiModel, PerplexityModel, ProposalAnalyzer, ProposalAssessment,
};

use crate::config::Config;

/// The production analyzer wiring used by the server.
pub type Analyzer = ProposalAnalyzer<HttpFetcher, OpenAiModel, PerplexityModel>;

/// Shared application state
///
/// Holds the analyzer and the most recent successful assessment, which
/// backs the export endpoint.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub last_assessment: Arc<RwLock<Option<ProposalAssessment>>>,
}

impl AppState {
    /// Build the state from configuration.
    pub fn new(config: &Config) -> Self {
        let analyzer = ProposalAnalyzer::new(
            &config.analyzer,
            &config.scoring_credentials,
            &config.ecosystem_credentials,
        );

        Self {
            analyzer: Arc::new(analyzer),
            last_assessment: Arc::new(RwLock::new(None)),
        }
    }
}
