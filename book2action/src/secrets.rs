//! Where the LLM API key comes from.

use llm_client::{Config, ProviderKind};

/// A place an API key may be stored. Blank keys count as absent.
pub trait ApiKeySource: Send + Sync {
    fn api_key(&self) -> Option<String>;

    /// Human-readable location, for "key not found" messages
    fn describe(&self) -> String;
}

/// Reads the key from an environment variable.
pub struct EnvApiKey {
    var: String,
}

impl EnvApiKey {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn for_provider(kind: ProviderKind) -> Self {
        Self::new(kind.env_var())
    }
}

impl ApiKeySource for EnvApiKey {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().and_then(non_blank)
    }

    fn describe(&self) -> String {
        format!("${}", self.var)
    }
}

/// A key known up front, typically read from the config file.
pub struct StaticApiKey {
    key: Option<String>,
    origin: String,
}

impl StaticApiKey {
    pub fn new(key: Option<String>, origin: impl Into<String>) -> Self {
        Self {
            key: key.and_then(non_blank),
            origin: origin.into(),
        }
    }
}

impl ApiKeySource for StaticApiKey {
    fn api_key(&self) -> Option<String> {
        self.key.clone()
    }

    fn describe(&self) -> String {
        self.origin.clone()
    }
}

/// Tries each source in order and returns the first key found.
pub struct ChainedApiKey {
    sources: Vec<Box<dyn ApiKeySource>>,
}

impl ChainedApiKey {
    pub fn new(sources: Vec<Box<dyn ApiKeySource>>) -> Self {
        Self { sources }
    }
}

impl ApiKeySource for ChainedApiKey {
    fn api_key(&self) -> Option<String> {
        self.sources.iter().find_map(|s| s.api_key())
    }

    fn describe(&self) -> String {
        self.sources
            .iter()
            .map(|s| s.describe())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Config file first, then the provider's environment variable.
pub fn default_source(config: &Config, provider: &str, kind: ProviderKind) -> ChainedApiKey {
    let configured = config
        .get_provider_config(provider)
        .and_then(|c| c.api_key.clone());

    ChainedApiKey::new(vec![
        Box::new(StaticApiKey::new(
            configured,
            format!("[providers.{}] api_key", provider),
        )),
        Box::new(EnvApiKey::for_provider(kind)),
    ])
}

fn non_blank(key: String) -> Option<String> {
    let key = key.trim().to_string();
    (!key.is_empty()).then_some(key)
}
