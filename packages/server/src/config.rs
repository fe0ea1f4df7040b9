use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use analysis::{AnalyzerConfig, ModelCredentials};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub scoring_credentials: ModelCredentials,
    pub ecosystem_credentials: ModelCredentials,
    pub analyzer: AnalyzerConfig,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// `OPENAI_API_KEY` is required. `PPLX_API_KEY` is optional; when
    /// absent the ecosystem pass reports a readable auth error instead
    /// of a comparison.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let openai_api_key =
            env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
        let pplx_api_key = env::var("PPLX_API_KEY").unwrap_or_default();

        let openai_model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string());
        let pplx_model = env::var("PPLX_MODEL").unwrap_or_else(|_| "sonar-pro".to_string());

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            scoring_credentials: ModelCredentials::new(openai_api_key, openai_model),
            ecosystem_credentials: ModelCredentials::new(pplx_api_key, pplx_model),
            analyzer: AnalyzerConfig::default(),
        })
    }
}
