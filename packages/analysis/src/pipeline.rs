//! Analysis pipeline orchestration.
//!
//! One call takes a topic URL through fetch, extraction, and both
//! model passes, and returns everything in an [`AnalysisReport`].

use tracing::{info, warn};

use crate::ai::{OpenAiModel, PerplexityModel};
use crate::config::AnalyzerConfig;
use crate::ecosystem::EcosystemAnalyst;
use crate::error::ScrapeResult;
use crate::fetch::HttpFetcher;
use crate::forum::parse_post;
use crate::scoring::ProposalScorer;
use crate::security::ModelCredentials;
use crate::traits::{ChatModel, PageFetcher};
use crate::types::AnalysisReport;

/// End-to-end proposal analyzer.
///
/// Fetches a topic page, extracts the first post, then runs the
/// scoring and ecosystem passes concurrently over the post body.
pub struct ProposalAnalyzer<F, S, E> {
    fetcher: F,
    scorer: ProposalScorer<S>,
    analyst: EcosystemAnalyst<E>,
}

impl<F, S, E> ProposalAnalyzer<F, S, E>
where
    F: PageFetcher,
    S: ChatModel,
    E: ChatModel,
{
    /// Assemble an analyzer from already-built parts.
    pub fn from_parts(
        fetcher: F,
        scorer: ProposalScorer<S>,
        analyst: EcosystemAnalyst<E>,
    ) -> Self {
        Self {
            fetcher,
            scorer,
            analyst,
        }
    }

    /// Analyze the proposal at `url`.
    ///
    /// Returns an error only when the page cannot be fetched or holds
    /// no post. The two model passes fail independently; their
    /// outcomes land in the report, with a failed scoring pass kept as
    /// a typed error next to whatever the ecosystem pass produced.
    pub async fn analyze(&self, url: &str) -> ScrapeResult<AnalysisReport> {
        info!(url = %url, "Analyzing proposal");

        let html = self.fetcher.fetch_page(url).await?;
        let post = parse_post(&html, url)?;

        info!(
            title = %post.title,
            content_length = post.body.len(),
            "Proposal scraped"
        );

        let (assessment, ecosystem) = tokio::join!(
            self.scorer.assess(&post.body),
            self.analyst.compare(&post.body)
        );

        if let Err(e) = &assessment {
            warn!(error = %e, "Scoring pass failed");
        }

        Ok(AnalysisReport {
            post,
            assessment,
            ecosystem,
        })
    }
}

impl ProposalAnalyzer<HttpFetcher, OpenAiModel, PerplexityModel> {
    /// Build the production analyzer with real HTTP and model clients.
    pub fn new(
        config: &AnalyzerConfig,
        scoring: &ModelCredentials,
        ecosystem: &ModelCredentials,
    ) -> Self {
        let fetcher = HttpFetcher::with_config(&config.fetch);
        let scorer = ProposalScorer::new(OpenAiModel::new(scoring, &config.scoring))
            .with_reply_snippet_len(config.scoring.reply_snippet_len);
        let analyst = EcosystemAnalyst::new(PerplexityModel::new(ecosystem, &config.ecosystem));

        Self::from_parts(fetcher, scorer, analyst)
    }
}
