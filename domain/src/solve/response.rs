//! Agent response types
//!
//! [`AgentResponse`] is the sole externally observable result of a solve
//! call. It is immutable once constructed; `to_record()` flattens it into
//! a plain JSON value for files and display.

use crate::solve::check::{Check, CheckReport};
use crate::solve::solution::Solution;
use serde::{Deserialize, Serialize};

/// Terminal status of a solve call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveStatus {
    /// Some attempt produced a non-empty, all-passing check set
    Success,
    /// Every attempt had a failing or empty check set
    Failed,
}

impl SolveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolveStatus::Success => "success",
            SolveStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic payload carried alongside the answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveMetadata {
    /// The plan text of the reported attempt (last attempt on failure)
    pub plan: String,
    /// On success: the winning attempt's checks.
    /// On failure: the full accumulated history across all attempts.
    pub checks: Vec<Check>,
    /// Number of attempts beyond the first that were needed, or the
    /// configured maximum when exhausted
    pub retries: u32,
}

/// Final structured response from a solve call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Final short answer, or a synthetic negative answer on failure
    pub answer: String,
    /// Terminal status
    pub status: SolveStatus,
    /// Explanation meant for the end user
    pub reasoning_visible_to_user: String,
    /// Plan, checks and retry count for inspection
    pub metadata: SolveMetadata,
}

impl AgentResponse {
    /// Build the success response for a verified attempt.
    pub fn success(solution: &Solution, plan: String, checks: Vec<Check>, retries: u32) -> Self {
        Self {
            answer: solution.answer.clone(),
            status: SolveStatus::Success,
            reasoning_visible_to_user: solution.reasoning.clone(),
            metadata: SolveMetadata {
                plan,
                checks,
                retries,
            },
        }
    }

    /// Build the failure response after all attempts are exhausted.
    ///
    /// The visible reasoning summarizes the last up-to-3 failing checks
    /// across the whole accumulated history.
    pub fn failed(plan: String, all_checks: Vec<Check>, max_retries: u32) -> Self {
        let summary = CheckReport::new(all_checks.clone()).failure_summary(3);
        Self {
            answer: "Unable to verify solution".to_string(),
            status: SolveStatus::Failed,
            reasoning_visible_to_user: format!(
                "Verification failed after {} retries. Issues: {}",
                max_retries, summary
            ),
            metadata: SolveMetadata {
                plan,
                checks: all_checks,
                retries: max_retries,
            },
        }
    }

    /// True if the solve succeeded
    pub fn is_success(&self) -> bool {
        self.status == SolveStatus::Success
    }

    /// Flatten into a plain JSON value for serialization or display.
    pub fn to_record(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }
}
