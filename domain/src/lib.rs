//! Domain layer for verisolve
//!
//! This crate contains the core records, the JSON extraction logic and
//! the prompt templates. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Solve loop
//!
//! One solve call runs up to `max_retries + 1` attempts; each attempt is
//! a Plan → Execute → Verify cycle:
//!
//! - **Plan**: opaque step-by-step plan text
//! - **Execute**: a structured [`Solution`] extracted from model output
//! - **Verify**: an ordered list of named pass/fail [`Check`]s
//!
//! The attempt succeeds when its check set is non-empty and fully
//! passing; otherwise the loop re-plans from scratch.

pub mod core;
pub mod extract;
pub mod prompt;
pub mod solve;
pub mod suite;

// Re-export commonly used types
pub use crate::core::question::Question;
pub use extract::{ExtractError, extract_array, extract_object};
pub use prompt::SolvePromptTemplate;
pub use solve::{
    AgentResponse, Check, CheckReport, Phase, Solution, SolveMetadata, SolveStatus,
};
pub use suite::{Category, TestCase, all_cases, check_answer, easy_cases, tricky_cases};
