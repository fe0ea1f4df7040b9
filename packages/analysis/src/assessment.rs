//! Structured proposal assessments.
//!
//! The scoring model is instructed to return one JSON object with an
//! exact shape. Deserialization here is deliberately unforgiving:
//! unknown fields, wrongly typed values, and out-of-range scores are
//! all rejected rather than coerced, so a drifting model surfaces as a
//! `MalformedResponse` instead of a silently wrong record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AssessmentError, AssessmentResult};

/// Highest score a criterion (or the weighted total) can carry.
pub const MAX_SCORE: u8 = 4;

/// Pass/fail verdict for a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CriterionStatus {
    Pass,
    Fail,
}

/// Scored verdict for writing quality or proposal clarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Criterion {
    pub status: CriterionStatus,
    pub score: u8,
    pub explanation: String,
    pub supporting_quotes: Vec<String>,
}

/// Scored verdict for the key-elements criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyElements {
    pub status: CriterionStatus,
    pub score: u8,
    pub explanation: String,
    pub elements_found: Vec<String>,
    pub elements_missing: Vec<String>,
    pub comments: Vec<String>,
}

/// Full assessment returned by the scoring model.
///
/// Field names and nesting match the JSON template in the scoring
/// prompt exactly. `weighted_score` is a float; the per-criterion
/// scores are integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProposalAssessment {
    pub writing_quality: Criterion,
    pub proposal_clarity: Criterion,
    pub key_elements: KeyElements,
    pub weighted_score: f64,
}

impl ProposalAssessment {
    /// Check score ranges after deserialization.
    ///
    /// Per-criterion scores must not exceed [`MAX_SCORE`] (the lower
    /// bound is already enforced by the unsigned type) and the weighted
    /// score must lie in `0.0..=4.0`. Returns the first violation as a
    /// reason string.
    pub fn validate(&self) -> Result<(), String> {
        let scored = [
            ("writing_quality", self.writing_quality.score),
            ("proposal_clarity", self.proposal_clarity.score),
            ("key_elements", self.key_elements.score),
        ];
        for (name, score) in scored {
            if score > MAX_SCORE {
                return Err(format!("{} score {} exceeds maximum {}", name, score, MAX_SCORE));
            }
        }

        if !(0.0..=MAX_SCORE as f64).contains(&self.weighted_score) {
            return Err(format!(
                "weighted_score {} outside 0..={}",
                self.weighted_score, MAX_SCORE
            ));
        }

        Ok(())
    }

    /// Pretty-printed JSON for file export.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Parse a scoring model reply into a validated assessment.
///
/// The reply must be exactly the assessment JSON object. No salvage is
/// attempted on code fences, surrounding prose, or partial JSON; the
/// prompt demands bare JSON and anything else is malformed. On failure
/// the first `snippet_len` characters of the reply travel with the
/// error for diagnostics.
pub fn parse_assessment(reply: &str, snippet_len: usize) -> AssessmentResult<ProposalAssessment> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return Err(AssessmentError::MalformedResponse {
            reason: "empty reply".to_string(),
            snippet: String::new(),
        });
    }

    let assessment: ProposalAssessment =
        serde_json::from_str(trimmed).map_err(|e| AssessmentError::MalformedResponse {
            reason: e.to_string(),
            snippet: snippet_of(trimmed, snippet_len),
        })?;

    assessment
        .validate()
        .map_err(|reason| AssessmentError::MalformedResponse {
            reason,
            snippet: snippet_of(trimmed, snippet_len),
        })?;

    Ok(assessment)
}

/// File name for an exported assessment, stamped to the second.
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("proposal_analysis_{}.json", at.format("%Y%m%d_%H%M%S"))
}

fn snippet_of(reply: &str, len: usize) -> String {
    reply.chars().take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const VALID_REPLY: &str = r#"{
        "writing_quality": {
            "status": "PASS",
            "score": 3,
            "explanation": "ok",
            "supporting_quotes": []
        },
        "proposal_clarity": {
            "status": "FAIL",
            "score": 1,
            "explanation": "vague",
            "supporting_quotes": []
        },
        "key_elements": {
            "status": "FAIL",
            "score": 1,
            "explanation": "missing milestones",
            "elements_found": ["budget"],
            "elements_missing": ["milestones", "KPIs"],
            "comments": []
        },
        "weighted_score": 1.5
    }"#;

    fn valid_value() -> serde_json::Value {
        serde_json::from_str(VALID_REPLY).unwrap()
    }

    #[test]
    fn test_parse_valid_assessment() {
        let assessment = parse_assessment(VALID_REPLY, 200).unwrap();

        assert_eq!(assessment.writing_quality.status, CriterionStatus::Pass);
        assert_eq!(assessment.writing_quality.score, 3);
        assert_eq!(assessment.proposal_clarity.status, CriterionStatus::Fail);
        assert_eq!(
            assessment.key_elements.elements_missing,
            vec!["milestones", "KPIs"]
        );
        assert_eq!(assessment.weighted_score, 1.5);
    }

    #[test]
    fn test_parse_accepts_integer_weighted_score() {
        let mut value = valid_value();
        value["weighted_score"] = serde_json::json!(3);

        let assessment = parse_assessment(&value.to_string(), 200).unwrap();
        assert_eq!(assessment.weighted_score, 3.0);
    }

    #[test]
    fn test_parse_rejects_empty_reply() {
        for reply in ["", "   ", "\n\n"] {
            let err = parse_assessment(reply, 200).unwrap_err();
            match err {
                AssessmentError::MalformedResponse { reason, snippet } => {
                    assert_eq!(reason, "empty reply");
                    assert!(snippet.is_empty());
                }
                other => panic!("expected MalformedResponse, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_unknown_top_level_field() {
        let mut value = valid_value();
        value["overall_comment"] = serde_json::json!("great");

        let err = parse_assessment(&value.to_string(), 200).unwrap_err();
        assert!(matches!(err, AssessmentError::MalformedResponse { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_nested_field() {
        let mut value = valid_value();
        value["writing_quality"]["confidence"] = serde_json::json!(0.9);

        let err = parse_assessment(&value.to_string(), 200).unwrap_err();
        assert!(matches!(err, AssessmentError::MalformedResponse { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let mut value = valid_value();
        value.as_object_mut().unwrap().remove("weighted_score");

        let err = parse_assessment(&value.to_string(), 200).unwrap_err();
        assert!(matches!(err, AssessmentError::MalformedResponse { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_criterion_key() {
        for key in ["writing_quality", "proposal_clarity", "key_elements"] {
            let mut value = valid_value();
            value.as_object_mut().unwrap().remove(key);

            let err = parse_assessment(&value.to_string(), 200).unwrap_err();
            match err {
                AssessmentError::MalformedResponse { reason, .. } => {
                    assert!(reason.contains(key), "reason for {}: {}", key, reason);
                }
                other => panic!("expected MalformedResponse, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_string_score() {
        let mut value = valid_value();
        value["writing_quality"]["score"] = serde_json::json!("3");

        let err = parse_assessment(&value.to_string(), 200).unwrap_err();
        assert!(matches!(err, AssessmentError::MalformedResponse { .. }));
    }

    #[test]
    fn test_parse_rejects_lowercase_status() {
        let mut value = valid_value();
        value["writing_quality"]["status"] = serde_json::json!("pass");

        let err = parse_assessment(&value.to_string(), 200).unwrap_err();
        assert!(matches!(err, AssessmentError::MalformedResponse { .. }));
    }

    #[test]
    fn test_parse_rejects_code_fence() {
        let fenced = format!("```json\n{}\n```", VALID_REPLY);

        let err = parse_assessment(&fenced, 200).unwrap_err();
        match err {
            AssessmentError::MalformedResponse { snippet, .. } => {
                assert!(snippet.starts_with("```json"));
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_score_above_max() {
        let mut value = valid_value();
        value["proposal_clarity"]["score"] = serde_json::json!(5);

        let err = parse_assessment(&value.to_string(), 200).unwrap_err();
        match err {
            AssessmentError::MalformedResponse { reason, .. } => {
                assert!(reason.contains("proposal_clarity"));
                assert!(reason.contains('5'));
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_weighted_score_out_of_range() {
        for bad in [4.5, -0.5] {
            let mut value = valid_value();
            value["weighted_score"] = serde_json::json!(bad);

            let err = parse_assessment(&value.to_string(), 200).unwrap_err();
            match err {
                AssessmentError::MalformedResponse { reason, .. } => {
                    assert!(reason.contains("weighted_score"));
                }
                other => panic!("expected MalformedResponse, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_snippet_is_truncated() {
        let garbage = "x".repeat(500);

        let err = parse_assessment(&garbage, 200).unwrap_err();
        match err {
            AssessmentError::MalformedResponse { snippet, .. } => {
                assert_eq!(snippet.chars().count(), 200);
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_snippet_counts_characters_not_bytes() {
        let garbage = "é".repeat(300);

        let err = parse_assessment(&garbage, 200).unwrap_err();
        match err {
            AssessmentError::MalformedResponse { snippet, .. } => {
                assert_eq!(snippet.chars().count(), 200);
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&CriterionStatus::Pass).unwrap();
        assert_eq!(json, "\"PASS\"");

        let json = serde_json::to_string(&CriterionStatus::Fail).unwrap();
        assert_eq!(json, "\"FAIL\"");
    }

    #[test]
    fn test_export_file_name() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 5).unwrap();
        assert_eq!(export_file_name(at), "proposal_analysis_20240115_093005.json");
    }

    #[test]
    fn test_export_json_is_pretty() {
        let assessment = parse_assessment(VALID_REPLY, 200).unwrap();
        let json = assessment.export_json().unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains("\"writing_quality\""));

        // The export round-trips through the same strict schema.
        let back: ProposalAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, assessment);
    }
}
