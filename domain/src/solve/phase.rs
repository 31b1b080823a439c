//! Solve phase labels

use serde::{Deserialize, Serialize};

/// Phase of one solve attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Planning phase - produce a step-by-step plan
    Plan,
    /// Execution phase - follow the plan to a solution
    Execute,
    /// Verification phase - run the named checks against the solution
    Verify,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Plan => "plan",
            Phase::Execute => "execute",
            Phase::Verify => "verify",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Plan => "Planning",
            Phase::Execute => "Executing",
            Phase::Verify => "Verifying",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
