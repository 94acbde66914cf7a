//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::deck::types::Locale;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub deck: DeckConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the deck is kept on disk
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("flipdeck").to_string_lossy().to_string())
        .unwrap_or_else(|| "./flipdeck_data".to_string())
}

fn default_file_name() -> String {
    "storage.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_name: default_file_name(),
        }
    }
}

impl StorageConfig {
    /// Path of the key-value file, with a leading `~/` expanded
    pub fn storage_path(&self) -> PathBuf {
        expand_home(&self.data_dir).join(&self.file_name)
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

/// Deck presentation settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub locale: Locale,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("flipdeck").join("config.toml")),
            Some(PathBuf::from("./flipdeck.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = var("FLIPDECK_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        if let Some(locale) = var("FLIPDECK_LOCALE") {
            match locale.parse() {
                Ok(locale) => self.deck.locale = locale,
                Err(e) => tracing::warn!("Ignoring FLIPDECK_LOCALE: {}", e),
            }
        }

        if let Some(level) = var("FLIPDECK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("FLIPDECK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Flipdeck Configuration
#
# Environment variables override these settings:
# - FLIPDECK_DATA_DIR
# - FLIPDECK_LOCALE
# - FLIPDECK_LOG_LEVEL
# - FLIPDECK_LOG_FORMAT

[storage]
# Directory holding the deck
data_dir = "~/.local/share/flipdeck"

# Key-value file inside data_dir; the deck lives under the "savedCards" key
file_name = "storage.json"

[deck]
# Placeholder text and labels: "zh-TW" or "en"
locale = "zh-TW"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.storage.file_name, "storage.json");
        assert_eq!(config.deck.locale, Locale::ZhTw);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[deck]\nlocale = \"en\"\n").unwrap();
        assert_eq!(config.deck.locale, Locale::En);
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.storage.file_name, "storage.json");
    }

    #[test]
    fn test_unknown_locale_rejected() {
        assert!(Config::parse("[deck]\nlocale = \"fr\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\ndata_dir = \"/tmp/decks\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(
            config.storage.storage_path(),
            PathBuf::from("/tmp/decks/storage.json")
        );

        let missing = Config::load(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FLIPDECK_DATA_DIR", "/data"),
            ("FLIPDECK_LOCALE", "en"),
            ("FLIPDECK_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.storage.data_dir, "/data");
        assert_eq!(config.deck.locale, Locale::En);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_bad_locale_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|name| (name == "FLIPDECK_LOCALE").then(|| "xx".to_string()));
        assert_eq!(config.deck.locale, Locale::ZhTw);
    }
}
