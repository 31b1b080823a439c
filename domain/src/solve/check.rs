//! Verification check types
//!
//! A [`Check`] is a single named pass/fail outcome produced by the verify
//! stage. [`CheckReport`] aggregates the checks accumulated over one or
//! more solve attempts and answers the questions the retry controller
//! cares about: did everything pass, and what failed most recently.

use serde::{Deserialize, Serialize};

/// A single verification outcome
///
/// # Example
///
/// ```
/// use verisolve_domain::solve::Check;
///
/// let ok = Check::pass("Arithmetic Check", "All calculations verified.");
/// assert!(ok.passed);
///
/// let bad = Check::fail("Units Check", "Answer mixes hours and minutes.");
/// assert!(!bad.passed);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Check {
    /// Name of the check (e.g., "Correctness Check")
    pub check_name: String,
    /// Whether the check passed
    pub passed: bool,
    /// Explanation from the verifier
    pub details: String,
}

impl Check {
    /// Create a new check
    pub fn new(check_name: impl Into<String>, passed: bool, details: impl Into<String>) -> Self {
        Self {
            check_name: check_name.into(),
            passed,
            details: details.into(),
        }
    }

    /// Create a passing check
    pub fn pass(check_name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(check_name, true, details)
    }

    /// Create a failing check
    pub fn fail(check_name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(check_name, false, details)
    }
}

/// Aggregated view over a sequence of checks
///
/// Order is the order the verifier returned them, which makes
/// "the last N failures" a meaningful query for failure reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Checks in insertion order
    pub checks: Vec<Check>,
}

impl CheckReport {
    pub fn new(checks: Vec<Check>) -> Self {
        Self { checks }
    }

    /// True iff the report is non-empty and every check passed.
    ///
    /// An empty report is NOT a success: a verifier that produced no
    /// checks has verified nothing.
    pub fn all_passed(&self) -> bool {
        !self.checks.is_empty() && self.checks.iter().all(|c| c.passed)
    }

    /// Number of passing checks
    pub fn pass_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Number of failing checks
    pub fn fail_count(&self) -> usize {
        self.checks.len() - self.pass_count()
    }

    /// Failing checks only, in insertion order
    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// Summarize the most recent `limit` failures as
    /// `"name: details; name: details"`.
    pub fn failure_summary(&self, limit: usize) -> String {
        let failed: Vec<&Check> = self.failures().collect();
        let start = failed.len().saturating_sub(limit);
        failed[start..]
            .iter()
            .map(|c| format!("{}: {}", c.check_name, c.details))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_creation() {
        let check = Check::pass("Logic Check", "Reasoning follows.");
        assert!(check.passed);
        assert_eq!(check.check_name, "Logic Check");
        assert_eq!(check.details, "Reasoning follows.");
    }

    #[test]
    fn test_all_passed() {
        let report = CheckReport::new(vec![
            Check::pass("Correctness Check", "Matches"),
            Check::pass("Arithmetic Check", "Verified"),
        ]);
        assert!(report.all_passed());
        assert_eq!(report.pass_count(), 2);
        assert_eq!(report.fail_count(), 0);
    }

    #[test]
    fn test_one_failure_fails_report() {
        let report = CheckReport::new(vec![
            Check::pass("Correctness Check", "Matches"),
            Check::fail("Units Check", "Mixed units"),
        ]);
        assert!(!report.all_passed());
        assert_eq!(report.fail_count(), 1);
    }

    #[test]
    fn test_empty_report_is_not_success() {
        let report = CheckReport::new(vec![]);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_failure_summary_takes_last_three() {
        let report = CheckReport::new(vec![
            Check::fail("A", "first"),
            Check::fail("B", "second"),
            Check::fail("C", "third"),
            Check::fail("D", "fourth"),
        ]);
        let summary = report.failure_summary(3);
        assert_eq!(summary, "B: second; C: third; D: fourth");
        assert!(!summary.contains("first"));
    }

    #[test]
    fn test_failure_summary_skips_passing_checks() {
        let report = CheckReport::new(vec![
            Check::pass("A", "fine"),
            Check::fail("B", "broken"),
        ]);
        assert_eq!(report.failure_summary(3), "B: broken");
    }

    #[test]
    fn test_failure_summary_empty() {
        let report = CheckReport::new(vec![Check::pass("A", "fine")]);
        assert_eq!(report.failure_summary(3), "");
    }

    #[test]
    fn test_check_deserialization_requires_all_fields() {
        let ok: Result<Check, _> = serde_json::from_str(
            r#"{"check_name": "Logic Check", "passed": true, "details": "ok"}"#,
        );
        assert!(ok.is_ok());

        let missing: Result<Check, _> =
            serde_json::from_str(r#"{"check_name": "Logic Check", "passed": true}"#);
        assert!(missing.is_err());
    }
}
