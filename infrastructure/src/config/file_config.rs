//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section and field is optional in the file; defaults fill the
//! gaps.

use serde::{Deserialize, Serialize};
use verisolve_application::DEFAULT_MAX_RETRIES;

/// Default Gemini model name
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Complete file configuration (raw TOML structure)
///
/// # Example
///
/// ```toml
/// [gemini]
/// model = "gemini-2.5-flash"
/// # api_key = "..."            # prefer the GEMINI_API_KEY env var
///
/// [solver]
/// max_retries = 2
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini provider settings
    pub gemini: FileGeminiConfig,
    /// Solve-loop settings
    pub solver: FileSolverConfig,
}

/// Gemini provider settings from TOML (`[gemini]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// API key; the `GEMINI_API_KEY` environment variable takes over
    /// when this is absent
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// Endpoint override, mainly for tests
    pub base_url: Option<String>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
        }
    }
}

/// Solve-loop settings from TOML (`[solver]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSolverConfig {
    /// Retries beyond the first attempt
    pub max_retries: u32,
}

impl Default for FileSolverConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert!(config.gemini.api_key.is_none());
        assert_eq!(config.solver.max_retries, 2);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [solver]
            max_retries = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.solver.max_retries, 5);
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_full_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [gemini]
            api_key = "secret"
            model = "gemini-2.5-pro"
            base_url = "http://localhost:9999"

            [solver]
            max_retries = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.gemini.api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.base_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(config.solver.max_retries, 0);
    }
}
