//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `LOCALMART_API_BASE_URL`: Backend base URL (required)
//! - `LOCALMART_API_TIMEOUT_SECS`: Request timeout in seconds (default 30)
//! - `LOCALMART_USER_AGENT`: Optional user agent string
//!
//! ## File Locations
//! The loader probes `config.{json,toml}` and `localmart.{json,toml}` in the
//! current working directory, its parents (2 levels), and next to the
//! executable.

use std::path::{Path, PathBuf};

use localmart_domain::ClientConfig;
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Invalid(String),
}

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ConfigError` if configuration cannot be loaded from either
/// source, or the file format is invalid.
pub fn load() -> Result<ClientConfig, ConfigError> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ConfigError` if `LOCALMART_API_BASE_URL` is missing or the
/// timeout value is not a number.
pub fn load_from_env() -> Result<ClientConfig, ConfigError> {
    let base_url = std::env::var("LOCALMART_API_BASE_URL").map_err(|_| {
        ConfigError::Invalid("Missing required environment variable: LOCALMART_API_BASE_URL".into())
    })?;

    let timeout_secs = match std::env::var("LOCALMART_API_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid(format!("Invalid timeout: {}", e)))?,
        Err(_) => ClientConfig::default().timeout_secs,
    };

    let user_agent = std::env::var("LOCALMART_USER_AGENT").ok();

    Ok(ClientConfig { base_url, timeout_secs, user_agent })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ConfigError` if no file is found or parsing fails.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::Invalid(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ConfigError::Invalid("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content; format detected by extension.
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ConfigError::Invalid(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ConfigError::Invalid(format!("Invalid JSON format: {}", e))),
        _ => Err(ConfigError::Invalid(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        for dir in [cwd.clone(), cwd.join(".."), cwd.join("../..")] {
            candidates.extend([
                dir.join("config.json"),
                dir.join("config.toml"),
                dir.join("localmart.json"),
                dir.join("localmart.toml"),
            ]);
        }
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend([
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("localmart.json"),
                exe_dir.join("localmart.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("LOCALMART_API_BASE_URL", "http://localhost:9000");
        std::env::set_var("LOCALMART_API_TIMEOUT_SECS", "10");
        std::env::set_var("LOCALMART_USER_AGENT", "localmart-test/1.0");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.user_agent.as_deref(), Some("localmart-test/1.0"));

        std::env::remove_var("LOCALMART_API_BASE_URL");
        std::env::remove_var("LOCALMART_API_TIMEOUT_SECS");
        std::env::remove_var("LOCALMART_USER_AGENT");
    }

    #[test]
    fn test_load_from_env_timeout_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("LOCALMART_API_BASE_URL", "http://localhost:9000");
        std::env::remove_var("LOCALMART_API_TIMEOUT_SECS");
        std::env::remove_var("LOCALMART_USER_AGENT");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.is_none());

        std::env::remove_var("LOCALMART_API_BASE_URL");
    }

    #[test]
    fn test_load_from_env_missing_base_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::remove_var("LOCALMART_API_BASE_URL");

        let result = load_from_env();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("LOCALMART_API_BASE_URL", "http://localhost:9000");
        std::env::set_var("LOCALMART_API_TIMEOUT_SECS", "not-a-number");

        let result = load_from_env();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        std::env::remove_var("LOCALMART_API_BASE_URL");
        std::env::remove_var("LOCALMART_API_TIMEOUT_SECS");
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "base_url": "https://api.example.com",
            "timeout_secs": 15
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("config from json");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_secs, 15);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
base_url = "https://api.example.com"
timeout_secs = 20
user_agent = "localmart/2.1"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("config from toml");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_secs, 20);
        assert_eq!(config.user_agent.as_deref(), Some("localmart/2.1"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("content", &PathBuf::from("test.yaml"));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
