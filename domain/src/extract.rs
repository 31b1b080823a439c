//! JSON extraction from noisy model output.
//!
//! Model responses are not guaranteed to be well-formed JSON: they arrive
//! wrapped in markdown fences, preceded by prose, or followed by
//! commentary. These functions recover a single JSON object or array from
//! such text by staged narrowing. They are pure domain logic: no I/O,
//! just text handling.
//!
//! Narrowing order:
//! 1. the inner text of a ```json fenced block, if present
//! 2. else the inner text of any fenced block
//! 3. the greedy span from the first opening bracket to the last closing
//!    bracket in the narrowed text
//! 4. else the narrowed text parsed whole
//!
//! The extractor never guesses field values; fallback policy on failure
//! belongs to the calling stage.

use thiserror::Error;

/// Extraction failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExtractError {
    #[error("no JSON object found in response")]
    NoObject,

    #[error("no JSON array found in response")]
    NoArray,

    #[error("malformed JSON in response: {0}")]
    Malformed(String),
}

/// Extract a single JSON object from `text`.
pub fn extract_object(text: &str) -> Result<serde_json::Value, ExtractError> {
    extract(text, '{', '}', ExtractError::NoObject)
}

/// Extract a single JSON array from `text`.
pub fn extract_array(text: &str) -> Result<serde_json::Value, ExtractError> {
    extract(text, '[', ']', ExtractError::NoArray)
}

fn extract(
    text: &str,
    open: char,
    close: char,
    not_found: ExtractError,
) -> Result<serde_json::Value, ExtractError> {
    let narrowed = narrow_fences(text.trim());

    match bracket_span(narrowed, open, close) {
        Some(span) => {
            serde_json::from_str(span).map_err(|e| ExtractError::Malformed(e.to_string()))
        }
        None => {
            // No bracket pair at all; the narrowed text itself is the
            // last candidate.
            let value: serde_json::Value =
                serde_json::from_str(narrowed).map_err(|_| not_found.clone())?;
            if shape_matches(&value, open) {
                Ok(value)
            } else {
                Err(not_found)
            }
        }
    }
}

/// Strip markdown fencing, preferring a ```json tagged block.
fn narrow_fences(text: &str) -> &str {
    if let Some(inner) = text
        .split("```json")
        .nth(1)
        .and_then(|s| s.split("```").next())
    {
        return inner.trim();
    }
    if let Some(inner) = text.split("```").nth(1) {
        return inner.trim();
    }
    text
}

/// Greedy span from the first `open` to the last `close`.
fn bracket_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn shape_matches(value: &serde_json::Value, open: char) -> bool {
    match open {
        '{' => value.is_object(),
        '[' => value.is_array(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_object_from_json_fence() {
        let text = "Sure! ```json\n{\"answer\": \"5\"}\n```";
        assert_eq!(extract_object(text).unwrap(), json!({"answer": "5"}));
    }

    #[test]
    fn test_extract_object_from_untagged_fence() {
        let text = "```\n{\"answer\": \"5\", \"reasoning\": \"count\"}\n```";
        assert_eq!(
            extract_object(text).unwrap(),
            json!({"answer": "5", "reasoning": "count"})
        );
    }

    #[test]
    fn test_extract_object_from_surrounding_prose() {
        let text = "Here is the result: {\"answer\": \"62\"} hope that helps!";
        assert_eq!(extract_object(text).unwrap(), json!({"answer": "62"}));
    }

    #[test]
    fn test_extract_bare_object() {
        let text = "  {\"answer\": \"62\"}  ";
        assert_eq!(extract_object(text).unwrap(), json!({"answer": "62"}));
    }

    #[test]
    fn test_extract_nested_object_is_greedy() {
        let text = "{\"outer\": {\"inner\": 1}}";
        assert_eq!(extract_object(text).unwrap(), json!({"outer": {"inner": 1}}));
    }

    #[test]
    fn test_extract_array() {
        let text = "```json\n[{\"check_name\": \"Logic Check\", \"passed\": true, \"details\": \"ok\"}]\n```";
        let value = extract_array(text).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["check_name"], "Logic Check");
    }

    #[test]
    fn test_extract_array_ignores_prose() {
        let text = "The checks are: [true, false] as requested.";
        assert_eq!(extract_array(text).unwrap(), json!([true, false]));
    }

    #[test]
    fn test_no_bracket_pair_is_an_error_not_a_panic() {
        let result = extract_array("I could not produce any checks, sorry.");
        assert_eq!(result, Err(ExtractError::NoArray));
    }

    #[test]
    fn test_no_object_in_plain_text() {
        let result = extract_object("forty-two");
        assert_eq!(result, Err(ExtractError::NoObject));
    }

    #[test]
    fn test_garbage_between_brackets_is_malformed() {
        let result = extract_object("{not json at all}");
        assert!(matches!(result, Err(ExtractError::Malformed(_))));
    }

    #[test]
    fn test_object_search_does_not_return_array() {
        // A bare array has no object span; whole-text parse succeeds but
        // the shape is wrong.
        let result = extract_object("[1, 2, 3]");
        assert_eq!(result, Err(ExtractError::NoObject));
    }

    #[test]
    fn test_json_fence_preferred_over_plain_fence() {
        let text = "```\nnot this\n```\n```json\n{\"answer\": \"yes\"}\n```";
        // The ```json block wins even though a plain fence appears first.
        assert_eq!(extract_object(text).unwrap(), json!({"answer": "yes"}));
    }
}
