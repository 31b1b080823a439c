//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{DEFAULT_MODEL, FileConfig, FileGeminiConfig, FileSolverConfig};
pub use loader::{ConfigError, ConfigLoader};
