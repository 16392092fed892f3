//! LLM provider implementations

pub mod mock;
mod openai_compatible;

pub use mock::MockProvider;
pub use openai_compatible::OpenAICompatibleProvider;

use std::str::FromStr;
use std::time::Duration;

use crate::config::{DEFAULT_TIMEOUT_SECS, ModelPreset, ProviderConfig};
use crate::error::{LlmError, Result};
use crate::provider::LlmProvider;

/// Supported provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenRouter,
    OpenAi,
}

impl FromStr for ProviderKind {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openrouter" | "open-router" => Ok(Self::OpenRouter),
            "openai" | "open-ai" => Ok(Self::OpenAi),
            _ => Err(LlmError::ConfigError(format!("Unknown provider: {}", s))),
        }
    }
}

impl ProviderKind {
    /// Canonical name used in llm.toml
    pub fn id(&self) -> &'static str {
        match self {
            Self::OpenRouter => "openrouter",
            Self::OpenAi => "openai",
        }
    }

    /// Environment variable consulted for this provider's API key
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::OpenRouter => "OPENROUTER_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenRouter => "OpenRouter",
            Self::OpenAi => "OpenAI",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenRouter => "https://openrouter.ai/api/v1",
            Self::OpenAi => "https://api.openai.com/v1",
        }
    }
}

/// Create a provider instance from a preset and an already-resolved API key
pub fn build_provider(
    preset: &ModelPreset,
    provider_config: Option<&ProviderConfig>,
    api_key: String,
) -> Result<Box<dyn LlmProvider>> {
    let kind = ProviderKind::from_str(&preset.provider)?;

    let base_url = provider_config
        .and_then(|c| c.base_url.as_deref())
        .unwrap_or(kind.default_base_url());
    let timeout = Duration::from_secs(
        provider_config
            .map(ProviderConfig::timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    );

    Ok(Box::new(OpenAICompatibleProvider::new(
        &preset.model,
        base_url,
        api_key,
        kind.display_name(),
        timeout,
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!(ProviderKind::from_str("OpenRouter").unwrap(), ProviderKind::OpenRouter);
        assert_eq!(ProviderKind::from_str("openai").unwrap(), ProviderKind::OpenAi);
        assert!(ProviderKind::from_str("claude-cli").is_err());
        assert_eq!(ProviderKind::from_str("Open-Router").unwrap().id(), "openrouter");
    }

    #[test]
    fn test_build_provider_uses_preset_model() {
        let preset = ModelPreset {
            provider: "openrouter".to_string(),
            model: "openai/gpt-4.1".to_string(),
        };
        let provider = build_provider(&preset, None, "sk-test".to_string()).unwrap();
        assert_eq!(provider.name(), "OpenRouter");
        assert_eq!(provider.model(), "openai/gpt-4.1");
    }
}
