//! book2action configuration management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::AnalyzerSettings;
use crate::normalize::Validation;

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 4000;
const DEFAULT_TRENDING_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Model preset from llm.toml; None uses its default_preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Sampling temperature for the analysis request
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion token budget for the analysis request
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Plan shape enforcement (strict or lenient)
    #[serde(default)]
    pub validation: Validation,

    /// Number of trending books shown per refresh
    #[serde(default = "default_trending_count")]
    pub trending_count: usize,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_trending_count() -> usize {
    DEFAULT_TRENDING_COUNT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preset: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            validation: Validation::default(),
            trending_count: default_trending_count(),
        }
    }
}

impl AppConfig {
    /// Get the config file path: ~/.config/book2action/book2action.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("book2action")
            .join("book2action.toml"))
    }

    /// Load config from the default location, returning default if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn analyzer_settings(&self) -> AnalyzerSettings {
        AnalyzerSettings::default()
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }
}
