//! Output formatter trait

use verisolve_application::SuiteReport;
use verisolve_domain::AgentResponse;

/// Trait for formatting solve results
pub trait OutputFormatter {
    /// Format the complete response with the check breakdown
    fn format(&self, response: &AgentResponse) -> String;

    /// Format as JSON
    fn format_json(&self, response: &AgentResponse) -> String;

    /// Format answer and reasoning only (concise output)
    fn format_answer_only(&self, response: &AgentResponse) -> String;

    /// Format a suite report summary
    fn format_suite_summary(&self, report: &SuiteReport) -> String;
}
