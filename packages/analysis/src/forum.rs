//! Forum topic parsing.
//!
//! Pulls the topic title and the first post's plain text out of a
//! server-rendered Discourse topic page.

use scraper::{ElementRef, Html, Selector};

use crate::error::{ScrapeError, ScrapeResult};
use crate::types::ProposalPost;

/// Selector for the topic title anchor.
const TITLE_SELECTOR: &str = "#topic-title h1 a";

/// Selector for post bodies. The first match is the proposal itself;
/// later matches are replies.
const POST_SELECTOR: &str = "div.post";

/// Title used when the page carries no recognizable topic title.
const UNTITLED: &str = "Untitled Proposal";

/// Parse a proposal post out of a topic page.
///
/// A missing title falls back to "Untitled Proposal"; a missing post
/// body is an error since there is nothing left to analyze.
pub fn parse_post(html: &str, source_url: &str) -> ScrapeResult<ProposalPost> {
    let document = Html::parse_document(html);

    let title = extract_title(&document).unwrap_or_else(|| UNTITLED.to_string());

    let body = extract_body(&document).ok_or_else(|| ScrapeError::ContentNotFound {
        url: source_url.to_string(),
    })?;

    Ok(ProposalPost {
        title,
        body,
        source_url: source_url.to_string(),
    })
}

fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse(TITLE_SELECTOR).ok()?;
    let element = document.select(&selector).next()?;
    Some(element.text().collect::<String>().trim().to_string())
}

fn extract_body(document: &Html) -> Option<String> {
    let selector = Selector::parse(POST_SELECTOR).ok()?;
    let element = document.select(&selector).next()?;
    Some(block_text(element))
}

/// Flatten an element into plain text, one line per text node.
///
/// Each text fragment is trimmed, whitespace-only fragments are
/// dropped, and script/style subtrees contribute nothing.
fn block_text(element: ElementRef) -> String {
    let mut lines = Vec::new();
    collect_text(element, &mut lines);
    lines.join("\n")
}

fn collect_text(element: ElementRef, lines: &mut Vec<String>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        } else if let Some(child_element) = ElementRef::wrap(child) {
            let name = child_element.value().name();
            if name == "script" || name == "style" {
                continue;
            }
            collect_text(child_element, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPIC_URL: &str = "https://gov.near.org/t/example-proposal/100";

    #[test]
    fn test_parse_full_topic() {
        let html = r#"
            <html><body>
            <div id="topic-title"><h1><a href="/t/example-proposal/100">Fund the Example Initiative</a></h1></div>
            <div class="post">
                <p>We request funding for the initiative.</p>
                <p>Budget: <strong>5000 NEAR</strong></p>
            </div>
            <div class="post"><p>A reply that is not the proposal.</p></div>
            </body></html>
        "#;

        let post = parse_post(html, TOPIC_URL).unwrap();

        assert_eq!(post.title, "Fund the Example Initiative");
        assert_eq!(
            post.body,
            "We request funding for the initiative.\nBudget:\n5000 NEAR"
        );
        assert_eq!(post.source_url, TOPIC_URL);
    }

    #[test]
    fn test_missing_title_falls_back() {
        let html = r#"
            <html><body>
            <div class="post"><p>Body only.</p></div>
            </body></html>
        "#;

        let post = parse_post(html, TOPIC_URL).unwrap();

        assert_eq!(post.title, "Untitled Proposal");
        assert_eq!(post.body, "Body only.");
    }

    #[test]
    fn test_missing_post_is_error() {
        let html = r#"
            <html><body>
            <div id="topic-title"><h1><a href="/t/x/1">Title Without Body</a></h1></div>
            <div class="reply"><p>Not a post element.</p></div>
            </body></html>
        "#;

        let err = parse_post(html, TOPIC_URL).unwrap_err();
        match err {
            ScrapeError::ContentNotFound { url } => assert_eq!(url, TOPIC_URL),
            other => panic!("expected ContentNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_only_first_post_is_used() {
        let html = r#"
            <html><body>
            <div class="post"><p>The proposal.</p></div>
            <div class="post"><p>First reply.</p></div>
            <div class="post"><p>Second reply.</p></div>
            </body></html>
        "#;

        let post = parse_post(html, TOPIC_URL).unwrap();
        assert_eq!(post.body, "The proposal.");
    }

    #[test]
    fn test_script_and_style_are_skipped() {
        let html = r#"
            <html><body>
            <div class="post">
                <p>Visible text.</p>
                <script>var tracked = true;</script>
                <style>.post { color: red; }</style>
                <p>More visible text.</p>
            </div>
            </body></html>
        "#;

        let post = parse_post(html, TOPIC_URL).unwrap();
        assert_eq!(post.body, "Visible text.\nMore visible text.");
    }

    #[test]
    fn test_nested_markup_becomes_lines() {
        let html = r#"
            <html><body>
            <div class="post">
                <h2>Goals</h2>
                <ul><li>First goal</li><li>Second goal</li></ul>
            </div>
            </body></html>
        "#;

        let post = parse_post(html, TOPIC_URL).unwrap();
        assert_eq!(post.body, "Goals\nFirst goal\nSecond goal");
    }
}
