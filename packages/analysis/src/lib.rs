//! Governance Proposal Analysis Library
//!
//! Scrapes a proposal from a governance forum topic page and reviews it
//! with two AI passes run side by side:
//!
//! - a **scoring** pass that grades writing quality, clarity, and key
//!   elements against a fixed rubric and must answer in a strict JSON
//!   shape, and
//! - an **ecosystem** pass that places the proposal among its peers as
//!   free text and never fails the run.
//!
//! The passes fail independently. A report always carries the scraped
//! post, a structured assessment or the typed reason it was rejected,
//! and the ecosystem narrative.
//!
//! # Usage
//!
//! ```rust,ignore
//! use analysis::{AnalyzerConfig, ModelCredentials, ProposalAnalyzer};
//!
//! let analyzer = ProposalAnalyzer::new(
//!     &AnalyzerConfig::default(),
//!     &ModelCredentials::new(openai_key, "gpt-4"),
//!     &ModelCredentials::new(pplx_key, "sonar-pro"),
//! );
//!
//! let report = analyzer.analyze("https://gov.near.org/t/some-proposal/123").await?;
//! println!("{}: {:?}", report.post.title, report.assessment);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Network seams (`PageFetcher`, `ChatModel`)
//! - [`fetch`] / [`forum`] - Page fetching and post extraction
//! - [`assessment`] - Strict-schema assessment records and parsing
//! - [`scoring`] / [`ecosystem`] - The two model passes
//! - [`pipeline`] - End-to-end orchestration
//! - [`security`] - Credential handling
//! - [`testing`] - Mock implementations for tests

pub mod ai;
pub mod assessment;
pub mod config;
pub mod ecosystem;
pub mod error;
pub mod fetch;
pub mod forum;
pub mod pipeline;
pub mod prompts;
pub mod scoring;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use ai::{OpenAiModel, PerplexityModel};
pub use assessment::{
    export_file_name, parse_assessment, Criterion, CriterionStatus, KeyElements,
    ProposalAssessment, MAX_SCORE,
};
pub use config::{AnalyzerConfig, EcosystemConfig, FetchConfig, ScoringConfig, BROWSER_USER_AGENT};
pub use ecosystem::EcosystemAnalyst;
pub use error::{AssessmentError, ModelError, ScrapeError};
pub use fetch::HttpFetcher;
pub use forum::parse_post;
pub use pipeline::ProposalAnalyzer;
pub use scoring::ProposalScorer;
pub use security::{ModelCredentials, SecretString};
pub use traits::{ChatModel, PageFetcher};
pub use types::{AnalysisReport, ProposalPost};
