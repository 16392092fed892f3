//! Mock LLM provider for testing
//!
//! Replays a scripted reply or failure and records every request it sees, so
//! callers can assert on prompts, sampling parameters and call counts.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::{LlmError, Result};
use crate::provider::{LlmProvider, LlmRequest, LlmResponse};

enum Script {
    Reply(String),
    Fail(fn() -> LlmError),
}

/// A mock provider with a fixed script
pub struct MockProvider {
    script: Script,
    requests: Mutex<Vec<LlmRequest>>,
    name: &'static str,
}

impl MockProvider {
    /// Create a provider that always answers with `content`
    pub fn replying(content: &str) -> Self {
        Self::with_script(Script::Reply(content.to_string()))
    }

    /// Create a provider that always fails with the error built by `make_error`
    pub fn failing(make_error: fn() -> LlmError) -> Self {
        Self::with_script(Script::Fail(make_error))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
            name: "mock",
        }
    }

    /// Set a custom provider name
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Number of times complete() was called
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<LlmRequest> {
        self.requests.lock().ok().and_then(|r| r.last().cloned())
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        match &self.script {
            Script::Reply(content) => Ok(LlmResponse {
                content: content.clone(),
                model: "mock-model".to_string(),
                usage: None,
            }),
            Script::Fail(make_error) => Err(make_error()),
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replying_records_requests() {
        let provider = MockProvider::replying("success");

        let result = provider
            .complete(LlmRequest::new("first").with_temperature(0.7))
            .await;
        assert_eq!(result.unwrap().content, "success");

        provider.complete(LlmRequest::new("second")).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.last_request().unwrap().prompt, "second");
    }

    #[tokio::test]
    async fn test_failing_returns_fresh_error_each_call() {
        let provider = MockProvider::failing(|| LlmError::Timeout { seconds: 30 });

        for _ in 0..3 {
            let result = provider.complete(LlmRequest::new("test")).await;
            assert!(matches!(result, Err(LlmError::Timeout { seconds: 30 })));
        }
        assert_eq!(provider.call_count(), 3);
    }

    #[test]
    fn test_untouched_mock_has_no_requests() {
        let provider = MockProvider::replying("unused").with_name("catalog-only");
        assert_eq!(provider.call_count(), 0);
        assert!(provider.last_request().is_none());
        assert_eq!(provider.name(), "catalog-only");
    }
}
