//! Chat-completion client for the book2action workspace
//!
//! Provides a small provider abstraction over OpenAI-compatible endpoints:
//! - OpenRouter (default, multi-model access)
//! - OpenAI (direct)
//! - A scripted mock for tests

pub mod config;
pub mod error;
pub mod provider;
pub mod providers;

pub use config::{Config, ModelPreset, ProviderConfig};
pub use error::{LlmError, Result};
pub use provider::{LlmProvider, LlmRequest, LlmResponse, TokenUsage};
pub use providers::{MockProvider, OpenAICompatibleProvider, ProviderKind, build_provider};
