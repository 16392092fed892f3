//! Pipeline failure causes.
//!
//! Every variant degrades to the same user-facing "not found" result; the
//! value itself is kept for logs and diagnostics.

use llm_client::LlmError;
use thiserror::Error;

/// Coarse classification of a [`PipelineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PolicyRejection,
    Configuration,
    Transport,
    MalformedResponse,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Title rejected by content policy: {title}")]
    PolicyRejection { title: String },

    #[error("LLM not configured: {0}")]
    Configuration(String),

    #[error("LLM request failed: {0}")]
    Transport(String),

    #[error("Malformed LLM response: {reason}")]
    MalformedResponse {
        reason: String,
        /// Raw assistant text, retained for developer diagnostics only
        raw: String,
    },
}

impl PipelineError {
    pub fn malformed(reason: impl Into<String>, raw: &str) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
            raw: raw.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PolicyRejection { .. } => ErrorKind::PolicyRejection,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Transport(_) => ErrorKind::Transport,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }

    /// Raw response text when the failure came from parsing or validation.
    pub fn raw_content(&self) -> Option<&str> {
        match self {
            Self::MalformedResponse { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl From<LlmError> for PipelineError {
    fn from(err: LlmError) -> Self {
        if err.is_transport() {
            Self::Transport(err.to_string())
        } else {
            Self::Configuration(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_classification() {
        let missing: PipelineError = LlmError::MissingApiKey {
            provider: "OpenRouter".to_string(),
            env_var: "OPENROUTER_API_KEY".to_string(),
        }
        .into();
        assert_eq!(missing.kind(), ErrorKind::Configuration);

        let preset: PipelineError = LlmError::InvalidPreset("missing".to_string()).into();
        assert_eq!(preset.kind(), ErrorKind::Configuration);

        let empty: PipelineError = LlmError::EmptyResponse {
            provider: "OpenRouter".to_string(),
        }
        .into();
        assert_eq!(empty.kind(), ErrorKind::Transport);

        let timeout: PipelineError = LlmError::Timeout { seconds: 30 }.into();
        assert_eq!(timeout.kind(), ErrorKind::Transport);
        assert_eq!(
            timeout.to_string(),
            "LLM request failed: Request timed out after 30 seconds"
        );
    }

    #[test]
    fn test_raw_content_only_for_malformed() {
        let err = PipelineError::malformed("expected value", "not json");
        assert_eq!(err.raw_content(), Some("not json"));
        assert_eq!(PipelineError::Transport("x".into()).raw_content(), None);
    }
}
