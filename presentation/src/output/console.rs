//! Console output formatter for solve results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use verisolve_application::SuiteReport;
use verisolve_domain::{AgentResponse, Category, SolveStatus};

/// Formats solve results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete response with the check breakdown
    pub fn format(response: &AgentResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Verisolve Result"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Answer:".cyan().bold(),
            response.answer
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "Status:".cyan().bold(),
            Self::status_label(response.status)
        ));

        output.push_str(&format!(
            "{}\n{}\n",
            "Reasoning:".cyan().bold(),
            response.reasoning_visible_to_user
        ));

        if !response.metadata.checks.is_empty() {
            output.push_str(&Self::section_header("Checks"));
            for check in &response.metadata.checks {
                let mark = if check.passed {
                    "v".green()
                } else {
                    "x".red()
                };
                output.push_str(&format!(
                    "  {} {}: {}\n",
                    mark, check.check_name, check.details
                ));
            }
        }

        output.push_str(&format!(
            "\n{}\n",
            format!(
                "[{} retries, {} checks recorded]",
                response.metadata.retries,
                response.metadata.checks.len()
            )
            .dimmed()
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(response: &AgentResponse) -> String {
        serde_json::to_string_pretty(&response.to_record()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format answer and reasoning only (concise output)
    pub fn format_answer_only(response: &AgentResponse) -> String {
        format!(
            "{} {}\n{}\n",
            Self::status_label(response.status),
            response.answer.bold(),
            response.reasoning_visible_to_user
        )
    }

    /// Format a suite report summary
    pub fn format_suite_summary(report: &SuiteReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Suite Summary"));
        output.push('\n');

        let total = report.total();
        output.push_str(&format!("{} {}\n", "Total cases:".cyan().bold(), total));
        output.push_str(&format!(
            "{} {}/{}\n",
            "Successful status:".cyan().bold(),
            report.successful_status(),
            total
        ));
        output.push_str(&format!(
            "{} {}/{}\n",
            "Correct answers:".cyan().bold(),
            report.correct_answers(),
            total
        ));

        for category in [Category::Easy, Category::Tricky] {
            let (correct, count) = report.category_score(category);
            output.push_str(&format!(
                "  {} {}/{} correct\n",
                format!("{}:", category).bold(),
                correct,
                count
            ));
        }

        output.push_str(&Self::section_header("Cases"));
        for record in &report.records {
            let mark = if record.answer_correct {
                "v".green()
            } else {
                "x".red()
            };
            output.push_str(&format!(
                "  {} #{:<2} [{}] {} -> {}\n",
                mark, record.test_num, record.category, record.description, record.answer
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    fn status_label(status: SolveStatus) -> String {
        match status {
            SolveStatus::Success => "success".green().bold().to_string(),
            SolveStatus::Failed => "failed".red().bold().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, response: &AgentResponse) -> String {
        Self::format(response)
    }

    fn format_json(&self, response: &AgentResponse) -> String {
        Self::format_json(response)
    }

    fn format_answer_only(&self, response: &AgentResponse) -> String {
        Self::format_answer_only(response)
    }

    fn format_suite_summary(&self, report: &SuiteReport) -> String {
        Self::format_suite_summary(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verisolve_domain::{Check, Solution};

    fn success_response() -> AgentResponse {
        AgentResponse::success(
            &Solution::new("62", "25 + 37 = 62", "work"),
            "1. Add".to_string(),
            vec![
                Check::pass("Correctness Check", "matches"),
                Check::fail("Units Check", "none given"),
            ],
            1,
        )
    }

    #[test]
    fn test_full_format_includes_checks() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&success_response());
        assert!(output.contains("Answer: 62"));
        assert!(output.contains("Correctness Check: matches"));
        assert!(output.contains("Units Check: none given"));
        assert!(output.contains("[1 retries, 2 checks recorded]"));
    }

    #[test]
    fn test_answer_only_is_concise() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_answer_only(&success_response());
        assert!(output.contains("62"));
        assert!(output.contains("25 + 37 = 62"));
        assert!(!output.contains("Correctness Check"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let output = ConsoleFormatter::format_json(&success_response());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["answer"], "62");
        assert_eq!(value["status"], "success");
    }
}
