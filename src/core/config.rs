//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("answer-i18n");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, writing the defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Stored language preference, `None` when set to "auto"
    pub fn stored_language(&self) -> Option<&str> {
        let lang = self.general.language.trim();
        if lang.is_empty() || lang.eq_ignore_ascii_case("auto") {
            None
        } else {
            Some(lang)
        }
    }

    /// Remember an explicit user choice for future sessions.
    ///
    /// Returns `false` when caching the user language is disabled.
    pub fn remember_language(&mut self, code: &str) -> bool {
        if !self.detection.cache_user_language {
            return false;
        }
        self.general.language = code.to_string();
        true
    }

    /// Whether verbose i18n logging is enabled (development builds by default)
    pub fn debug_enabled(&self) -> bool {
        self.general.debug.unwrap_or(cfg!(debug_assertions))
    }
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "da", "en"
    #[serde(default = "default_language")]
    pub language: String,
    /// Verbose i18n logging; follows the build mode when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            debug: None,
        }
    }
}

/// A source consulted when detecting the preferred language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionSource {
    /// Locale environment variables and OS locale
    Environment,
    /// Language stored in the config file
    Stored,
}

/// Language detection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Sources in precedence order
    #[serde(default = "default_order")]
    pub order: Vec<DetectionSource>,
    /// Environment variables inspected, in order
    #[serde(default = "default_env_vars")]
    pub env_vars: Vec<String>,
    /// Persist explicit language choices to the config file
    #[serde(default = "default_true")]
    pub cache_user_language: bool,
}

fn default_true() -> bool { true }
fn default_order() -> Vec<DetectionSource> {
    vec![DetectionSource::Environment, DetectionSource::Stored]
}
fn default_env_vars() -> Vec<String> {
    ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .map(|v| v.to_string())
        .collect()
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
            env_vars: default_env_vars(),
            cache_user_language: true,
        }
    }
}

/// Remote translation backend settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the translation server
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path template; `{{lng}}` and `{{ns}}` are substituted
    #[serde(default = "default_load_path")]
    pub load_path: String,
    /// Translation namespace
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Request timeout in seconds (no timeout when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String { "http://localhost:50505".to_string() }
fn default_load_path() -> String { "/locales/{{lng}}/{{ns}}.json".to_string() }
fn default_namespace() -> String { "translation".to_string() }

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            load_path: default_load_path(),
            namespace: default_namespace(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.general.language, "auto");
        assert_eq!(config.stored_language(), None);
        assert_eq!(
            config.detection.order,
            vec![DetectionSource::Environment, DetectionSource::Stored]
        );
        assert_eq!(config.detection.env_vars[0], "LANGUAGE");
        assert_eq!(config.backend.load_path, "/locales/{{lng}}/{{ns}}.json");
        assert_eq!(config.debug_enabled(), cfg!(debug_assertions));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [general]
            language = "da"
            debug = true

            [backend]
            base_url = "https://example.test"
            "#,
        )
        .unwrap();

        assert_eq!(config.stored_language(), Some("da"));
        assert!(config.debug_enabled());
        assert_eq!(config.backend.base_url, "https://example.test");
        assert_eq!(config.backend.namespace, "translation");
        assert!(config.detection.cache_user_language);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        assert!(config.remember_language("da"));
        config.backend.timeout_secs = Some(5);
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.stored_language(), Some("da"));
        assert_eq!(reloaded.backend.timeout_secs, Some(5));
    }

    #[test]
    fn test_remember_language_disabled() {
        let mut config = Config::default();
        config.detection.cache_user_language = false;

        assert!(!config.remember_language("da"));
        assert_eq!(config.stored_language(), None);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "general = 3").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
