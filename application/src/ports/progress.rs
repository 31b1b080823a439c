//! Progress notification ports
//!
//! Define the interfaces for reporting progress during solve and suite
//! execution. Implementations live in the presentation layer and can
//! display progress in various ways (spinner, plain text, nothing).

use verisolve_domain::{Check, Phase, TestCase};

/// Callback for progress updates during one solve call
pub trait SolveProgress: Send + Sync {
    /// Called when an attempt starts (0-based, `max_attempts` total)
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32);

    /// Called when a phase of the current attempt starts
    fn on_phase_start(&self, phase: Phase);

    /// Called when a phase of the current attempt completes
    fn on_phase_complete(&self, phase: Phase);

    /// Called when an attempt finishes with its verification outcome
    fn on_attempt_complete(&self, attempt: u32, checks: &[Check], passed: bool);
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl SolveProgress for NoProgress {
    fn on_attempt_start(&self, _attempt: u32, _max_attempts: u32) {}
    fn on_phase_start(&self, _phase: Phase) {}
    fn on_phase_complete(&self, _phase: Phase) {}
    fn on_attempt_complete(&self, _attempt: u32, _checks: &[Check], _passed: bool) {}
}

/// Callback for progress updates during a suite run
pub trait SuiteProgress: Send + Sync {
    /// Called before a fixture case runs (1-based case number)
    fn on_case_start(&self, case_num: usize, total: usize, case: &TestCase);

    /// Called after a fixture case finishes
    fn on_case_complete(&self, case_num: usize, answer_correct: bool, answer: &str);
}

/// No-op suite notifier
pub struct NoSuiteProgress;

impl SuiteProgress for NoSuiteProgress {
    fn on_case_start(&self, _case_num: usize, _total: usize, _case: &TestCase) {}
    fn on_case_complete(&self, _case_num: usize, _answer_correct: bool, _answer: &str) {}
}
