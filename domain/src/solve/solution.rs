//! Solution record produced by the execute stage

use serde::{Deserialize, Serialize};

/// Maximum length of the reasoning excerpt kept by the parse fallback
const FALLBACK_REASONING_LEN: usize = 200;

/// The executor's answer to a question
///
/// Deserialized from the executor's JSON output; all three fields are
/// required, so a response missing any of them is a parse failure and is
/// routed into [`Solution::parse_failure`] rather than surfacing as a
/// fault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Solution {
    /// Final short answer
    pub answer: String,
    /// Brief explanation of how the answer was reached
    pub reasoning: String,
    /// Detailed step-by-step work and calculations
    pub intermediate_work: String,
}

impl Solution {
    pub fn new(
        answer: impl Into<String>,
        reasoning: impl Into<String>,
        intermediate_work: impl Into<String>,
    ) -> Self {
        Self {
            answer: answer.into(),
            reasoning: reasoning.into(),
            intermediate_work: intermediate_work.into(),
        }
    }

    /// Degraded solution used when the executor's response cannot be
    /// parsed: the raw text is preserved for inspection, with a truncated
    /// excerpt as the visible reasoning.
    pub fn parse_failure(raw_response: &str) -> Self {
        let reasoning = if raw_response.len() > FALLBACK_REASONING_LEN {
            truncate_chars(raw_response, FALLBACK_REASONING_LEN)
        } else {
            raw_response.to_string()
        };
        Self {
            answer: "Error parsing response".to_string(),
            reasoning,
            intermediate_work: raw_response.to_string(),
        }
    }

    /// True if this solution is the parse-failure fallback
    pub fn is_parse_failure(&self) -> bool {
        self.answer == "Error parsing response"
    }
}

/// Truncate to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_from_json() {
        let solution: Solution = serde_json::from_str(
            r#"{"answer": "62", "reasoning": "25 + 37 = 62", "intermediate_work": "25 + 37"}"#,
        )
        .unwrap();
        assert_eq!(solution.answer, "62");
        assert!(!solution.is_parse_failure());
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let result: Result<Solution, _> =
            serde_json::from_str(r#"{"answer": "62", "reasoning": "sum"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_failure_keeps_full_raw_text() {
        let raw = "The answer is probably 62 but I cannot emit JSON.";
        let solution = Solution::parse_failure(raw);
        assert_eq!(solution.answer, "Error parsing response");
        assert_eq!(solution.reasoning, raw);
        assert_eq!(solution.intermediate_work, raw);
        assert!(solution.is_parse_failure());
    }

    #[test]
    fn test_parse_failure_truncates_long_reasoning() {
        let raw = "x".repeat(500);
        let solution = Solution::parse_failure(&raw);
        assert_eq!(solution.reasoning.chars().count(), 200);
        assert_eq!(solution.intermediate_work.len(), 500);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let s = "héllo wörld";
        assert_eq!(truncate_chars(s, 4), "héll");
    }
}
