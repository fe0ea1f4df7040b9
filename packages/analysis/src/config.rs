//! Configuration for the analysis pipeline.

use std::time::Duration;

/// Browser-style user agent sent with forum page requests.
///
/// The forum serves complete server-rendered HTML to browser user
/// agents; default library UAs get a skeleton page without the post.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for fetching proposal pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Client-side request timeout. None waits indefinitely.
    ///
    /// Default: None.
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl FetchConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Configuration for the scoring pass.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Sampling temperature. Default: 0.7.
    pub temperature: f32,

    /// Maximum tokens in the model reply. Default: 2000.
    pub max_tokens: u32,

    /// Characters of a malformed reply kept for diagnostics.
    ///
    /// Default: 200.
    pub reply_snippet_len: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
            reply_snippet_len: 200,
        }
    }
}

impl ScoringConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the reply token limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set how much of a malformed reply is kept in errors.
    pub fn with_reply_snippet_len(mut self, len: usize) -> Self {
        self.reply_snippet_len = len;
        self
    }
}

/// Configuration for the ecosystem comparison pass.
#[derive(Debug, Clone)]
pub struct EcosystemConfig {
    /// Sampling temperature. Default: 0.7.
    pub temperature: f32,

    /// Maximum tokens in the model reply. Default: 2000.
    pub max_tokens: u32,
}

impl Default for EcosystemConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

impl EcosystemConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the reply token limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Top-level configuration for the proposal analyzer.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    pub fetch: FetchConfig,
    pub scoring: ScoringConfig,
    pub ecosystem: EcosystemConfig,
}

impl AnalyzerConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fetch settings.
    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }

    /// Replace the scoring settings.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Replace the ecosystem settings.
    pub fn with_ecosystem(mut self, ecosystem: EcosystemConfig) -> Self {
        self.ecosystem = ecosystem;
        self
    }
}
