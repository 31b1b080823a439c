//! Application layer for verisolve
//!
//! This crate contains the solve and suite use cases and the port
//! definitions they depend on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{CompletionGateway, CompletionRequest, GatewayError},
    progress::{NoProgress, NoSuiteProgress, SolveProgress, SuiteProgress},
};
pub use use_cases::run_suite::{CaseRecord, RunSuiteInput, RunSuiteUseCase, SuiteReport};
pub use use_cases::solve::{DEFAULT_MAX_RETRIES, SolveInput, SolveUseCase};
