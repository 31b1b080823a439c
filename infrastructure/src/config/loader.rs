//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration failures, the only fatal startup conditions
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "GEMINI_API_KEY not found. Set it as an environment variable or as \
         `api_key` under [gemini] in the config file."
    )]
    MissingApiKey,

    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `VERISOLVE_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./verisolve.toml` or `./.verisolve.toml`
    /// 4. XDG config: `~/.config/verisolve/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        for filename in &["verisolve.toml", ".verisolve.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("VERISOLVE_").split("__"));

        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Resolve the API key: config file first, then `GEMINI_API_KEY`.
    ///
    /// A missing key is fatal; there is nothing useful the agent can do
    /// without the credential.
    pub fn resolve_api_key(config: &FileConfig) -> Result<String, ConfigError> {
        resolve_api_key_from(
            config.gemini.api_key.as_deref(),
            std::env::var("GEMINI_API_KEY").ok(),
        )
    }

    /// Get the global config file path (`~/.config/verisolve/config.toml`)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("verisolve").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["verisolve.toml", ".verisolve.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./verisolve.toml or ./.verisolve.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

fn resolve_api_key_from(
    file_key: Option<&str>,
    env_key: Option<String>,
) -> Result<String, ConfigError> {
    if let Some(key) = file_key.filter(|k| !k.trim().is_empty()) {
        return Ok(key.to_string());
    }
    env_key
        .filter(|k| !k.trim().is_empty())
        .ok_or(ConfigError::MissingApiKey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.solver.max_retries, 2);
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_explicit_config_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[solver]\nmax_retries = 7").unwrap();

        let path = file.path().to_path_buf();
        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.solver.max_retries, 7);
        // Untouched sections keep their defaults.
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_global_config_path_mentions_app_dir() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("verisolve"));
    }

    #[test]
    fn test_api_key_prefers_config_file() {
        let key = resolve_api_key_from(Some("file-key"), Some("env-key".to_string())).unwrap();
        assert_eq!(key, "file-key");
    }

    #[test]
    fn test_api_key_falls_back_to_env() {
        let key = resolve_api_key_from(None, Some("env-key".to_string())).unwrap();
        assert_eq!(key, "env-key");
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let result = resolve_api_key_from(None, None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let result = resolve_api_key_from(Some("  "), Some(String::new()));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }
}
