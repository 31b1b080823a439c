//! Progress reporting for solve and suite execution

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use verisolve_application::{SolveProgress, SuiteProgress};
use verisolve_domain::{Check, Phase, TestCase};

/// Reports solve progress with a per-attempt progress bar
pub struct ProgressReporter {
    multi: MultiProgress,
    attempt_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            attempt_bar: Mutex::new(None),
        }
    }

    fn attempt_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveProgress for ProgressReporter {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        // Three phases per attempt: plan, execute, verify.
        let pb = self.multi.add(ProgressBar::new(3));
        pb.set_style(Self::attempt_style());
        pb.set_prefix(format!("Attempt {}/{}", attempt + 1, max_attempts));
        pb.set_message("Starting...");

        *self.attempt_bar.lock().unwrap() = Some(pb);
    }

    fn on_phase_start(&self, phase: Phase) {
        if let Some(pb) = self.attempt_bar.lock().unwrap().as_ref() {
            pb.set_message(format!("{}...", phase.display_name()));
        }
    }

    fn on_phase_complete(&self, _phase: Phase) {
        if let Some(pb) = self.attempt_bar.lock().unwrap().as_ref() {
            pb.inc(1);
        }
    }

    fn on_attempt_complete(&self, _attempt: u32, checks: &[Check], passed: bool) {
        if let Some(pb) = self.attempt_bar.lock().unwrap().take() {
            let message = if passed {
                format!("{} ({} checks)", "verified".green(), checks.len())
            } else {
                let failing = checks.iter().filter(|c| !c.passed).count();
                format!("{} ({}/{} checks failing)", "rejected".red(), failing, checks.len())
            };
            pb.finish_with_message(message);
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SolveProgress for SimpleProgress {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        println!(
            "{} Attempt {}/{}",
            "->".cyan(),
            attempt + 1,
            max_attempts
        );
    }

    fn on_phase_start(&self, phase: Phase) {
        println!("  {} {}...", "*".dimmed(), phase.display_name());
    }

    fn on_phase_complete(&self, _phase: Phase) {}

    fn on_attempt_complete(&self, _attempt: u32, checks: &[Check], passed: bool) {
        if passed {
            println!("  {} verified ({} checks)", "v".green(), checks.len());
        } else {
            println!("  {} rejected", "x".red());
        }
        println!();
    }
}

/// Per-case suite progress in the classic banner style
pub struct SuiteReporter;

impl SuiteProgress for SuiteReporter {
    fn on_case_start(&self, case_num: usize, total: usize, case: &TestCase) {
        println!();
        println!("{}", "=".repeat(70).cyan());
        println!(
            "{}",
            format!(
                "Test #{}/{} [{}]: {}",
                case_num, total, case.category, case.description
            )
            .bold()
        );
        println!("{}", "=".repeat(70).cyan());
        println!("Question: {}", case.question);
    }

    fn on_case_complete(&self, _case_num: usize, answer_correct: bool, answer: &str) {
        let mark = if answer_correct {
            "v".green()
        } else {
            "x".red()
        };
        println!("{} Answer: {}", mark, answer);
    }
}
