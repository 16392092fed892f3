//! Asking the LLM for a book analysis.

use std::sync::Arc;

use llm_client::{Config, LlmProvider, LlmRequest, ProviderKind, providers::build_provider};
use log::{debug, error, info, warn};

use crate::error::PipelineError;
use crate::secrets::{self, ApiKeySource, StaticApiKey};

const PROMPT_TEMPLATE: &str = r#"Analyze the book "{title}" and provide a comprehensive response in the following JSON format:

{
  "title": "Exact book title",
  "author": "Author name",
  "publishedYear": year_as_number,
  "genre": "Primary genre",
  "isbn": "The book's ISBN-13 number (13 digits, no hyphens)",
  "summary": "A comprehensive 3-paragraph summary that deeply explores the book's core concepts, main themes, key insights, practical methodologies, and real-world applications. Separate paragraphs with a blank line.",
  "actionableSteps": [
    {
      "day": "Monday",
      "step": "Specific actionable step that readers can implement",
      "chapter": "Chapter or section where this concept is primarily discussed",
      "details": {
        "sentences": [
          "Detailed explanation sentence 1",
          "Detailed explanation sentence 2",
          "Detailed explanation sentence 3",
          "Detailed explanation sentence 4",
          "Detailed explanation sentence 5"
        ],
        "keyTakeaway": "The core lesson to remember from this action step"
      }
    }
  ]
}

Requirements:
- If the book doesn't exist or you're not familiar with it, return null
- The summary should be 3 substantial paragraphs
- Provide exactly 7 actionable steps, one for each day of the week (Monday through Sunday), in that order
- Chapter references should be specific (e.g., "Chapter 3: The Power of Habit" or "Part 2: The Four Laws")
- Each step should have detailed implementation information
- Include the correct ISBN-13 number for accurate book identification; if unknown, use an empty string
- Respond with the JSON only

Please analyze: "{title}""#;

/// The analysis prompt for `title`.
pub fn build_prompt(title: &str) -> String {
    PROMPT_TEMPLATE.replace("{title}", title)
}

/// Sampling parameters for the analysis request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4000,
        }
    }
}

impl AnalyzerSettings {
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

enum Backend {
    Ready(Arc<dyn LlmProvider>),
    Unconfigured(String),
}

/// Sends one analysis request per call. No retries.
pub struct LlmBookAnalyzer {
    backend: Backend,
    settings: AnalyzerSettings,
}

impl LlmBookAnalyzer {
    pub fn new(provider: Arc<dyn LlmProvider>, settings: AnalyzerSettings) -> Self {
        Self {
            backend: Backend::Ready(provider),
            settings,
        }
    }

    /// An analyzer that reports `reason` as a configuration error on every call.
    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self {
            backend: Backend::Unconfigured(reason.into()),
            settings: AnalyzerSettings::default(),
        }
    }

    /// Build from llm.toml, resolving the key from the config file or the
    /// provider's environment variable.
    pub fn from_config(config: &Config, preset: Option<&str>, settings: AnalyzerSettings) -> Self {
        let keys = config.resolve_preset(preset).ok().and_then(|p| {
            p.provider
                .parse::<ProviderKind>()
                .ok()
                .map(|kind| secrets::default_source(config, &p.provider, kind))
        });

        match keys {
            Some(keys) => Self::from_config_with_keys(config, preset, &keys, settings),
            None => Self::from_config_with_keys(
                config,
                preset,
                &StaticApiKey::new(None, "llm.toml"),
                settings,
            ),
        }
    }

    /// Build from llm.toml with an explicit key source.
    pub fn from_config_with_keys(
        config: &Config,
        preset: Option<&str>,
        keys: &dyn ApiKeySource,
        settings: AnalyzerSettings,
    ) -> Self {
        let preset = match config.resolve_preset(preset) {
            Ok(preset) => preset,
            Err(e) => return Self::unconfigured(e.to_string()).with_settings(settings),
        };

        if let Err(e) = preset.provider.parse::<ProviderKind>() {
            return Self::unconfigured(e.to_string()).with_settings(settings);
        }

        let Some(api_key) = keys.api_key() else {
            let reason = format!("API key not found; set {}", keys.describe());
            warn!("{}", reason);
            return Self::unconfigured(reason).with_settings(settings);
        };

        match build_provider(preset, config.get_provider_config(&preset.provider), api_key) {
            Ok(provider) => Self::new(Arc::from(provider), settings),
            Err(e) => Self::unconfigured(e.to_string()).with_settings(settings),
        }
    }

    fn with_settings(mut self, settings: AnalyzerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.backend, Backend::Ready(_))
    }

    pub fn settings(&self) -> AnalyzerSettings {
        self.settings
    }

    /// Raw assistant text for `title`, or `None` on any failure.
    pub async fn analyze(&self, title: &str) -> Option<String> {
        self.analyze_detailed(title).await.ok()
    }

    /// Raw assistant text for `title`, with the failure cause on error.
    pub async fn analyze_detailed(&self, title: &str) -> Result<String, PipelineError> {
        let provider = match &self.backend {
            Backend::Ready(provider) => provider,
            Backend::Unconfigured(reason) => {
                error!("Cannot analyze \"{}\": {}", title, reason);
                return Err(PipelineError::Configuration(reason.clone()));
            }
        };

        info!(
            "Starting AI analysis for \"{}\" via {} ({})",
            title,
            provider.name(),
            provider.model()
        );

        let request = LlmRequest::new(build_prompt(title))
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens);

        match provider.complete(request).await {
            Ok(response) => {
                debug!(
                    "Received {} characters from {}",
                    response.content.len(),
                    response.model
                );
                Ok(response.content)
            }
            Err(e) => {
                error!("Error calling {}: {}", provider.name(), e);
                Err(e.into())
            }
        }
    }
}
