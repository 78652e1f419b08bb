//! Travel companion configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default search radius for nearby recommendations, in meters
pub const DEFAULT_RADIUS_M: u32 = 5000;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Language-model provider configuration
    pub llm: LlmConfig,

    /// Mapping/places provider configuration
    pub maps: MapsConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Both provider credentials must be present before any request is made.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [self.llm.api_key_env.as_str(), self.maps.api_key_env.as_str()]
            .into_iter()
            .filter(|name| std::env::var(name).map(|v| v.trim().is_empty()).unwrap_or(true))
            .collect();

        if !missing.is_empty() {
            return Err(eyre::eyre!(
                "API key not found. Set the {} environment variable{}.",
                missing.join(" and "),
                if missing.len() > 1 { "s" } else { "" }
            ));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::search_paths() {
            if candidate.exists() {
                match Self::load_from_file(&candidate) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", candidate.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    ///
    /// Errors are swallowed; the full load later reports them.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = match config_path {
            Some(p) => p.clone(),
            None => Self::search_paths().into_iter().find(|p| p.exists())?,
        };
        let content = fs::read_to_string(path).ok()?;
        let config: Self = serde_yaml::from_str(&content).ok()?;
        config.log_level
    }

    /// Project-local config first, then the user config directory
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".travelcompanion.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("travelcompanion").join("travelcompanion.yml"));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Language-model provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: "https://api.openai.com".to_string(),
            timeout_ms: 60_000,
        }
    }
}

/// Mapping/places provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapsConfig {
    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL (Places, Directions and Geocoding live under it)
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Default radius for nearby searches
    #[serde(rename = "radius-m")]
    pub radius_m: u32,
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_MAPS_API_KEY".to_string(),
            base_url: "https://maps.googleapis.com/maps/api".to_string(),
            timeout_ms: 30_000,
            radius_m: DEFAULT_RADIUS_M,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.log_level.is_none());
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert_eq!(config.maps.radius_m, 5000);
    }

    #[test]
    fn test_llm_config_defaults() {
        let config = LlmConfig::default();

        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.base_url, "https://api.openai.com");
    }

    #[test]
    fn test_maps_config_defaults() {
        let config = MapsConfig::default();

        assert_eq!(config.api_key_env, "GOOGLE_MAPS_API_KEY");
        assert_eq!(config.base_url, "https://maps.googleapis.com/maps/api");
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
log-level: debug

llm:
  model: gpt-4o-mini
  api-key-env: MY_OPENAI_KEY
  base-url: https://llm.example.com
  timeout-ms: 10000

maps:
  api-key-env: MY_MAPS_KEY
  radius-m: 2500
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.api_key_env, "MY_OPENAI_KEY");
        assert_eq!(config.llm.timeout_ms, 10_000);
        assert_eq!(config.maps.api_key_env, "MY_MAPS_KEY");
        assert_eq!(config.maps.radius_m, 2500);
        // unspecified field keeps its default
        assert_eq!(config.maps.base_url, "https://maps.googleapis.com/maps/api");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
llm:
  model: gpt-4o
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.maps.radius_m, DEFAULT_RADIUS_M);
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log-level: warn\nmaps:\n  radius-m: 1200").unwrap();
        let path = file.path().to_path_buf();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.maps.radius_m, 1200);
        assert_eq!(Config::load_log_level(Some(&path)).as_deref(), Some("warn"));
    }

    #[test]
    fn test_load_explicit_path_missing_file() {
        let path = PathBuf::from("/nonexistent/travelcompanion.yml");
        assert!(Config::load(Some(&path)).is_err());
        assert!(Config::load_log_level(Some(&path)).is_none());
    }

    #[test]
    #[serial]
    fn test_validate_reports_missing_keys() {
        let mut config = Config::default();
        config.llm.api_key_env = "TC_TEST_LLM_KEY".to_string();
        config.maps.api_key_env = "TC_TEST_MAPS_KEY".to_string();

        // SAFETY: serialized test, no other thread reads these variables
        unsafe {
            std::env::remove_var("TC_TEST_LLM_KEY");
            std::env::remove_var("TC_TEST_MAPS_KEY");
        }
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("TC_TEST_LLM_KEY"));
        assert!(err.contains("TC_TEST_MAPS_KEY"));

        unsafe {
            std::env::set_var("TC_TEST_LLM_KEY", "sk-test");
        }
        let err = config.validate().unwrap_err().to_string();
        assert!(!err.contains("TC_TEST_LLM_KEY"));
        assert!(err.contains("TC_TEST_MAPS_KEY"));

        unsafe {
            std::env::set_var("TC_TEST_MAPS_KEY", "maps-test");
        }
        assert!(config.validate().is_ok());

        unsafe {
            std::env::remove_var("TC_TEST_LLM_KEY");
            std::env::remove_var("TC_TEST_MAPS_KEY");
        }
    }
}
