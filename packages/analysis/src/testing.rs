//! Testing utilities including mock implementations.
//!
//! These are useful for exercising the pipeline without network or
//! model calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{ModelError, ModelResult, ScrapeError, ScrapeResult};
use crate::traits::{ChatModel, PageFetcher};

/// A mock page fetcher backed by canned HTML.
///
/// Clones share state, so a clone kept outside the pipeline still sees
/// the calls made through the original.
#[derive(Default, Clone)]
pub struct MockFetcher {
    /// Predefined page bodies by URL
    pages: Arc<RwLock<HashMap<String, String>>>,

    /// URLs that fail with a network error, and the message to fail with
    fail_urls: Arc<RwLock<HashMap<String, String>>>,

    /// Fetched URLs, in order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create an empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned page body for a URL.
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), html.into());
        self
    }

    /// Make a URL fail with a network error carrying `message`.
    pub fn fail_url(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.fail_urls
            .write()
            .unwrap()
            .insert(url.into(), message.into());
        self
    }

    /// URLs fetched so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_page(&self, url: &str) -> ScrapeResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        if let Some(message) = self.fail_urls.read().unwrap().get(url) {
            return Err(ScrapeError::Network {
                url: url.to_string(),
                message: message.clone(),
            });
        }

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Network {
                url: url.to_string(),
                message: "no canned page for URL".to_string(),
            })
    }
}

/// Record of one call made to a [`MockChatModel`].
#[derive(Debug, Clone)]
pub struct MockChatCall {
    pub system: String,
    pub user: String,
}

/// A mock chat model with one canned outcome.
///
/// Replies with an empty string until configured through `with_reply`
/// or `with_error`. Every call is recorded for prompt assertions, and
/// clones share state like [`MockFetcher`].
#[derive(Default, Clone)]
pub struct MockChatModel {
    reply: Arc<RwLock<Option<ModelResult<String>>>>,
    calls: Arc<RwLock<Vec<MockChatCall>>>,
}

impl MockChatModel {
    /// Create a mock that replies with an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canned reply text.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        *self.reply.write().unwrap() = Some(Ok(reply.into()));
        self
    }

    /// Set a canned failure.
    pub fn with_error(self, error: ModelError) -> Self {
        *self.reply.write().unwrap() = Some(Err(error));
        self
    }

    /// Calls made so far.
    pub fn calls(&self) -> Vec<MockChatCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn complete(&self, system: &str, user: &str) -> ModelResult<String> {
        self.calls.write().unwrap().push(MockChatCall {
            system: system.to_string(),
            user: user.to_string(),
        });

        self.reply
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

/// A scoring reply that parses as a valid assessment.
pub fn sample_assessment_json() -> &'static str {
    r#"{
        "writing_quality": {
            "status": "PASS",
            "score": 3,
            "explanation": "Well structured and professional.",
            "supporting_quotes": ["We request funding for the initiative."]
        },
        "proposal_clarity": {
            "status": "PASS",
            "score": 3,
            "explanation": "Objectives are specific and time-bound.",
            "supporting_quotes": []
        },
        "key_elements": {
            "status": "PASS",
            "score": 3,
            "explanation": "Most required elements are present.",
            "elements_found": ["budget", "team", "timelines"],
            "elements_missing": ["KPIs"],
            "comments": ["KPIs should be quantified."]
        },
        "weighted_score": 3
    }"#
}

/// A minimal server-rendered topic page with one proposal post.
pub fn sample_topic_html(title: &str, paragraphs: &[&str]) -> String {
    let body: String = paragraphs.iter().map(|p| format!("<p>{}</p>", p)).collect();

    format!(
        "<html><body>\
         <div id=\"topic-title\"><h1><a href=\"/t/topic/1\">{}</a></h1></div>\
         <div class=\"post\">{}</div>\
         </body></html>",
        title, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forum::parse_post;

    #[tokio::test]
    async fn test_mock_fetcher_returns_page() {
        let fetcher = MockFetcher::new().with_page("https://example.com/t/1", "<html></html>");

        let html = fetcher.fetch_page("https://example.com/t/1").await.unwrap();
        assert_eq!(html, "<html></html>");
        assert_eq!(fetcher.calls(), vec!["https://example.com/t/1"]);
    }

    #[tokio::test]
    async fn test_mock_fetcher_fail_url() {
        let fetcher = MockFetcher::new().fail_url("https://down.example.com", "connection reset");

        let err = fetcher.fetch_page("https://down.example.com").await.unwrap_err();
        match err {
            ScrapeError::Network { url, message } => {
                assert_eq!(url, "https://down.example.com");
                assert_eq!(message, "connection reset");
            }
            other => panic!("expected Network, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_fetcher_unknown_url_fails() {
        let fetcher = MockFetcher::new();

        let result = fetcher.fetch_page("https://unknown.example.com").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_chat_model_defaults_to_empty_reply() {
        let model = MockChatModel::new();

        let reply = model.complete("system", "user").await.unwrap();
        assert_eq!(reply, "");
    }

    #[tokio::test]
    async fn test_mock_chat_model_records_calls() {
        let model = MockChatModel::new().with_reply("canned");

        let reply = model.complete("be brief", "say hi").await.unwrap();
        assert_eq!(reply, "canned");

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, "be brief");
        assert_eq!(calls[0].user, "say hi");
    }

    #[tokio::test]
    async fn test_mock_chat_model_canned_error_repeats() {
        let model = MockChatModel::new().with_error(ModelError::EmptyReply);

        assert!(model.complete("s", "u").await.is_err());
        assert!(model.complete("s", "u").await.is_err());
        assert_eq!(model.calls().len(), 2);
    }

    #[test]
    fn test_sample_assessment_json_is_valid() {
        let assessment = crate::assessment::parse_assessment(sample_assessment_json(), 200).unwrap();
        assert_eq!(assessment.weighted_score, 3.0);
    }

    #[test]
    fn test_sample_topic_html_parses() {
        let html = sample_topic_html("A Title", &["First.", "Second."]);

        let post = parse_post(&html, "https://example.com/t/1").unwrap();
        assert_eq!(post.title, "A Title");
        assert_eq!(post.body, "First.\nSecond.");
    }
}
