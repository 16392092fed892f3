use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error(
        "API key not found for {provider}. Set {env_var} environment variable or add to config."
    )]
    MissingApiKey { provider: String, env_var: String },

    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("Rate limit exceeded{}", .retry_after.map(|s| format!(". Retry after {} seconds", s)).unwrap_or_default())]
    RateLimited { retry_after: Option<u64> },

    #[error("Server overloaded (HTTP 503): {message}")]
    ServerOverloaded { message: String },

    #[error("API error{}: {message}", status_code.map(|c| format!(" (HTTP {})", c)).unwrap_or_default())]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    #[error("No content received from {provider}")]
    EmptyResponse { provider: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid model preset: {0}")]
    InvalidPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl LlmError {
    /// True when the request never produced a usable HTTP exchange or the
    /// endpoint answered with a failure status.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. }
                | Self::RateLimited { .. }
                | Self::ServerOverloaded { .. }
                | Self::ApiError { .. }
                | Self::EmptyResponse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_message() {
        let err = LlmError::RateLimited {
            retry_after: Some(12),
        };
        assert_eq!(err.to_string(), "Rate limit exceeded. Retry after 12 seconds");

        let err = LlmError::RateLimited { retry_after: None };
        assert_eq!(err.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn test_api_error_message() {
        let err = LlmError::ApiError {
            message: "bad key".to_string(),
            status_code: Some(401),
        };
        assert_eq!(err.to_string(), "API error (HTTP 401): bad key");
    }

    #[test]
    fn test_classification() {
        assert!(LlmError::Timeout { seconds: 30 }.is_transport());
        assert!(
            LlmError::EmptyResponse {
                provider: "OpenRouter".to_string()
            }
            .is_transport()
        );
        assert!(!LlmError::InvalidPreset("missing".to_string()).is_transport());

        let missing = LlmError::MissingApiKey {
            provider: "OpenRouter".to_string(),
            env_var: "OPENROUTER_API_KEY".to_string(),
        };
        assert!(!missing.is_transport());
    }
}
