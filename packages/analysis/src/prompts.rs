//! Prompts for the scoring and ecosystem passes.
//!
//! Templates use `{content}` placeholders filled via `str::replace`,
//! not `format!`; proposal text and the JSON template both contain
//! literal braces.

/// System prompt for the scoring model.
///
/// Spells out the rubric and the exact JSON shape of
/// [`crate::assessment::ProposalAssessment`].
pub const SCORING_SYSTEM_PROMPT: &str = r#"You are an expert reviewer for NEAR Protocol governance proposals. Analyze proposals using these criteria, adapting to proposal type (e.g., technical, community, infrastructure):

1. Writing Quality (20%):
   - Professional tone, correct grammar, no jargon, clear structure.
   - Score 0-4 (0=incoherent, 1=poor with errors, 2=acceptable, 3=professional, 4=exceptional).
2. Proposal Clarity (30%):
   - SMART objectives (Specific, Measurable, Achievable, Relevant, Time-bound).
   - Score 0-4 (0=unclear, 1=vague, 2=partially clear, 3=clear, 4=highly detailed).
3. Key Elements (40% for budget/timelines, 10% for team):
   - Required: budget (cost breakdown), team (roles, experience), goals, context, milestones, timelines, KPIs.
   - Score 0-4 (0=missing most, 1=few present, 2=some present, 3=most present, 4=all present with detail).
   - For incomplete elements, note feasibility or need for clarification.

Return a JSON with this EXACT structure (no additional fields):
{
    "writing_quality": {
        "status": "PASS",
        "score": 3,
        "explanation": "Brief explanation",
        "supporting_quotes": ["quote 1", "quote 2"]
    },
    "proposal_clarity": {
        "status": "PASS",
        "score": 3,
        "explanation": "Brief explanation",
        "supporting_quotes": ["quote 1", "quote 2"]
    },
    "key_elements": {
        "status": "PASS",
        "score": 3,
        "explanation": "Brief explanation",
        "elements_found": ["element 1", "element 2"],
        "elements_missing": ["element 1", "element 2"],
        "comments": ["comment 1", "comment 2"]
    },
    "weighted_score": 3
}"#;

/// User prompt template for the scoring model.
pub const SCORING_USER_PROMPT: &str = "Please analyze this proposal and return ONLY the JSON response with no additional text or formatting:\n\n{content}";

/// System prompt for the ecosystem comparison model.
pub const ECOSYSTEM_SYSTEM_PROMPT: &str = "You are a NEAR governance evaluator based on your current and historic knowledge of NEAR ecosystem.";

/// User prompt template for the ecosystem comparison model.
pub const ECOSYSTEM_USER_PROMPT: &str = "Give a short analysis of how this proposal compares to others, and whether it is needed/comprehensive, dont add any footnotes: {content}";

/// Fill the scoring user prompt with the proposal text.
pub fn format_scoring_prompt(content: &str) -> String {
    SCORING_USER_PROMPT.replace("{content}", content)
}

/// Fill the ecosystem user prompt with the proposal text.
pub fn format_ecosystem_prompt(content: &str) -> String {
    ECOSYSTEM_USER_PROMPT.replace("{content}", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_prompt_demands_exact_shape() {
        assert!(SCORING_SYSTEM_PROMPT.contains("EXACT structure"));
        assert!(SCORING_SYSTEM_PROMPT.contains("\"weighted_score\": 3"));
        assert!(SCORING_SYSTEM_PROMPT.contains("\"elements_missing\""));
    }

    #[test]
    fn test_format_scoring_prompt() {
        let prompt = format_scoring_prompt("My proposal text");

        assert!(prompt.starts_with("Please analyze this proposal"));
        assert!(prompt.ends_with("My proposal text"));
        assert!(!prompt.contains("{content}"));
    }

    #[test]
    fn test_format_ecosystem_prompt() {
        let prompt = format_ecosystem_prompt("My proposal text");

        assert!(prompt.starts_with("Give a short analysis"));
        assert!(prompt.ends_with("My proposal text"));
        assert!(!prompt.contains("{content}"));
    }

    #[test]
    fn test_format_keeps_braces_in_content() {
        let prompt = format_scoring_prompt("budget table: {amount} NEAR");
        assert!(prompt.contains("{amount}"));
    }
}
