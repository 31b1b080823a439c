//! Infrastructure layer for verisolve
//!
//! This crate contains the adapters that implement the ports defined in
//! the application layer: the Gemini completion gateway and the
//! configuration loader.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig, FileGeminiConfig, FileSolverConfig};
pub use gemini::{GeminiConfig, GeminiGateway};
