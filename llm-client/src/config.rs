use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{LlmError, Result};

/// Preset used when the config file does not name one
pub const DEFAULT_PRESET: &str = "openrouter-gpt41";

/// Default request timeout for API providers, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Preset used when no --model flag is provided
    #[serde(default = "default_preset")]
    pub default_preset: String,

    /// Named model presets for quick access
    #[serde(default)]
    pub presets: HashMap<String, ModelPreset>,

    /// Provider-specific configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

fn default_preset() -> String {
    DEFAULT_PRESET.to_string()
}

/// A named model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPreset {
    /// Provider identifier (openrouter, openai)
    pub provider: String,

    /// Model name/identifier for the provider
    pub model: String,
}

/// Provider-specific configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key (optional, can use env var instead)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Custom base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, defaulting when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config
            .presets
            .entry(DEFAULT_PRESET.to_string())
            .or_insert_with(builtin_preset);
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| LlmError::ConfigError("HOME not set".into()))?;
        Ok(PathBuf::from(home).join(".config/book2action/llm.toml"))
    }

    /// Get a preset by name
    pub fn get_preset(&self, name: &str) -> Result<&ModelPreset> {
        self.presets
            .get(name)
            .ok_or_else(|| LlmError::InvalidPreset(name.to_string()))
    }

    /// Resolve an explicit preset name, or the configured default
    pub fn resolve_preset(&self, name: Option<&str>) -> Result<&ModelPreset> {
        self.get_preset(name.unwrap_or(&self.default_preset))
    }

    /// Get provider config by provider name
    pub fn get_provider_config(&self, provider: &str) -> Option<&ProviderConfig> {
        self.providers.get(provider)
    }

    /// Store an API key for a provider, creating its section if needed
    pub fn set_api_key(&mut self, provider: &str, key: impl Into<String>) {
        self.providers
            .entry(provider.to_string())
            .or_default()
            .api_key = Some(key.into());
    }
}

fn builtin_preset() -> ModelPreset {
    ModelPreset {
        provider: "openrouter".to_string(),
        model: "openai/gpt-4.1".to_string(),
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut presets = HashMap::new();

        presets.insert(DEFAULT_PRESET.to_string(), builtin_preset());

        Self {
            default_preset: DEFAULT_PRESET.to_string(),
            presets,
            providers: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_preset, DEFAULT_PRESET);

        let preset = config.resolve_preset(None).unwrap();
        assert_eq!(preset.provider, "openrouter");
        assert_eq!(preset.model, "openai/gpt-4.1");
    }

    #[test]
    fn test_invalid_preset() {
        let config = Config::default();
        assert!(matches!(
            config.get_preset("nonexistent"),
            Err(LlmError::InvalidPreset(_))
        ));
    }

    #[test]
    fn test_config_path() {
        let path = Config::config_path().unwrap();
        assert!(path.ends_with(".config/book2action/llm.toml"));
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.default_preset, DEFAULT_PRESET);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/llm.toml");

        let mut config = Config::default();
        config.set_api_key("openrouter", "sk-test");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        let provider = loaded.get_provider_config("openrouter").unwrap();
        assert_eq!(provider.api_key.as_deref(), Some("sk-test"));
        assert_eq!(provider.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_keeps_builtin_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("llm.toml");
        std::fs::write(&path, "[providers.openrouter]\napi_key = \"k\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.resolve_preset(None).unwrap().model, "openai/gpt-4.1");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
[providers.openrouter]
base_url = "http://localhost:9999/v1"
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_preset, DEFAULT_PRESET);
        assert!(config.presets.is_empty());

        let provider = config.get_provider_config("openrouter").unwrap();
        assert_eq!(provider.timeout_secs(), 5);
        assert!(provider.api_key.is_none());
    }
}
