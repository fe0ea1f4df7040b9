use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use analysis::{AnalysisReport, AssessmentError, ProposalAssessment, ProposalPost, ScrapeError};

use crate::server::routes::ErrorResponse;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Why the scoring pass produced no assessment, shaped for the UI.
#[derive(Serialize)]
pub struct AssessmentErrorView {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_snippet: Option<String>,
}

impl AssessmentErrorView {
    fn from_error(error: &AssessmentError) -> Self {
        match error {
            AssessmentError::ApiFailure { status, message } => Self {
                message: message.clone(),
                status: *status,
                reply_snippet: None,
            },
            AssessmentError::MalformedResponse { reason, snippet } => Self {
                message: reason.clone(),
                status: None,
                reply_snippet: Some(snippet.clone()),
            },
        }
    }
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub post: ProposalPost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<ProposalAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_error: Option<AssessmentErrorView>,
    pub ecosystem: String,
}

impl AnalyzeResponse {
    fn from_report(report: AnalysisReport) -> Self {
        let (assessment, assessment_error) = match report.assessment {
            Ok(assessment) => (Some(assessment), None),
            Err(e) => (None, Some(AssessmentErrorView::from_error(&e))),
        };

        Self {
            post: report.post,
            assessment,
            assessment_error,
            ecosystem: report.ecosystem,
        }
    }
}

/// Analyze a proposal URL
///
/// Returns 422 when the page holds no post and 502 when it cannot be
/// fetched. A run with a failed scoring pass is still 200; the detail
/// rides in `assessment_error` next to the ecosystem narrative.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let report = state.analyzer.analyze(&request.url).await.map_err(|e| {
        let status = match &e {
            ScrapeError::ContentNotFound { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ScrapeError::Network { .. } => StatusCode::BAD_GATEWAY,
        };
        (
            status,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    // Keep the latest successful assessment for the export endpoint.
    if let Ok(assessment) = &report.assessment {
        *state.last_assessment.write().await = Some(assessment.clone());
    }

    Ok(Json(AnalyzeResponse::from_report(report)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis::{parse_assessment, testing::sample_assessment_json};

    fn sample_report(assessment: Result<ProposalAssessment, AssessmentError>) -> AnalysisReport {
        AnalysisReport {
            post: ProposalPost::new("Title", "Body", "https://example.com/t/1"),
            assessment,
            ecosystem: "narrative".to_string(),
        }
    }

    #[test]
    fn test_response_from_successful_report() {
        let assessment = parse_assessment(sample_assessment_json(), 200).unwrap();
        let response = AnalyzeResponse::from_report(sample_report(Ok(assessment)));

        assert!(response.assessment.is_some());
        assert!(response.assessment_error.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("assessment_error").is_none());
        assert_eq!(json["ecosystem"], "narrative");
    }

    #[test]
    fn test_response_from_failed_scoring() {
        let error = AssessmentError::ApiFailure {
            status: Some(500),
            message: "upstream down".to_string(),
        };
        let response = AnalyzeResponse::from_report(sample_report(Err(error)));

        assert!(response.assessment.is_none());
        let view = response.assessment_error.as_ref().unwrap();
        assert_eq!(view.status, Some(500));
        assert_eq!(view.message, "upstream down");

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("assessment").is_none());
    }

    #[test]
    fn test_malformed_view_carries_snippet() {
        let error = AssessmentError::MalformedResponse {
            reason: "expected value at line 1".to_string(),
            snippet: "Sure! {".to_string(),
        };
        let view = AssessmentErrorView::from_error(&error);

        assert_eq!(view.status, None);
        assert_eq!(view.reply_snippet.as_deref(), Some("Sure! {"));
        assert!(view.message.contains("expected value"));
    }
}
