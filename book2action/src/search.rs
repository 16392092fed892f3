//! The search façade: policy, catalog, then the LLM.

use log::{debug, info, warn};

use crate::analyzer::LlmBookAnalyzer;
use crate::catalog::LocalCatalog;
use crate::error::PipelineError;
use crate::model::BookSearchResult;
use crate::normalize::ResponseNormalizer;
use crate::policy;

pub const POLICY_MESSAGE: &str =
    "Sorry, we cannot process this book title due to our content policy.";

/// User-facing text for every non-policy failure.
pub fn not_found_message(title: &str) -> String {
    format!(
        "Sorry, we couldn't find or analyze \"{}\". Please try a different book title or check the spelling.",
        title
    )
}

/// What a search produced, plus the cause when it failed.
///
/// `diagnostic` is for logs and developers; the presentation layer only
/// ever sees `result`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub result: BookSearchResult,
    pub diagnostic: Option<PipelineError>,
}

impl SearchOutcome {
    fn found(result: BookSearchResult) -> Self {
        Self {
            result,
            diagnostic: None,
        }
    }

    fn failed(message: String, cause: PipelineError) -> Self {
        Self {
            result: BookSearchResult::not_found(message),
            diagnostic: Some(cause),
        }
    }
}

pub struct BookSearchOrchestrator {
    catalog: LocalCatalog,
    analyzer: LlmBookAnalyzer,
    normalizer: ResponseNormalizer,
}

impl BookSearchOrchestrator {
    pub fn new(
        catalog: LocalCatalog,
        analyzer: LlmBookAnalyzer,
        normalizer: ResponseNormalizer,
    ) -> Self {
        Self {
            catalog,
            analyzer,
            normalizer,
        }
    }

    /// Built-in catalog and strict normalization in front of `analyzer`.
    pub fn with_analyzer(analyzer: LlmBookAnalyzer) -> Self {
        Self::new(LocalCatalog::builtin(), analyzer, ResponseNormalizer::strict())
    }

    pub fn catalog(&self) -> &LocalCatalog {
        &self.catalog
    }

    /// Resolve `title` to a book. Makes at most one LLM request.
    pub async fn search(&self, title: &str) -> SearchOutcome {
        let display_title = title.trim();
        let normalized = display_title.to_lowercase();
        info!("Searching for book: \"{}\"", display_title);

        if !policy::is_appropriate(&normalized) {
            warn!("Rejected \"{}\" by content policy", display_title);
            return SearchOutcome::failed(
                POLICY_MESSAGE.to_string(),
                PipelineError::PolicyRejection {
                    title: display_title.to_string(),
                },
            );
        }

        if let Some(book) = self.catalog.lookup(&normalized) {
            debug!("Catalog hit: \"{}\"", book.title);
            return SearchOutcome::found(BookSearchResult::Found(book.clone()));
        }

        debug!("Catalog miss, asking the LLM");
        match self.analyze(display_title).await {
            Ok(result) => SearchOutcome::found(result),
            Err(cause) => {
                warn!("Search for \"{}\" failed: {}", display_title, cause);
                if let Some(raw) = cause.raw_content() {
                    debug!("Raw content: {}", raw);
                }
                SearchOutcome::failed(not_found_message(display_title), cause)
            }
        }
    }

    async fn analyze(&self, title: &str) -> Result<BookSearchResult, PipelineError> {
        let raw = self.analyzer.analyze_detailed(title).await?;
        let book = self.normalizer.normalize_detailed(&raw)?;
        info!("Analyzed \"{}\" by {}", book.title, book.author);
        Ok(BookSearchResult::Found(book))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::AnalyzerSettings;
    use crate::error::ErrorKind;
    use crate::model::WEEKDAYS;
    use llm_client::{LlmError, MockProvider};
    use serde_json::json;
    use std::sync::Arc;

    fn plan_json(steps: usize) -> String {
        let steps: Vec<_> = (0..steps)
            .map(|i| {
                json!({
                    "day": WEEKDAYS[i % 7],
                    "step": format!("Block {} hours for focused work", i + 1),
                    "chapter": "Part 2: The Rules",
                })
            })
            .collect();
        let body = json!({
            "title": "Deep Work",
            "author": "Cal Newport",
            "publishedYear": 2016,
            "genre": "Productivity",
            "isbn": "9781455586691",
            "summary": "One.\n\nTwo.\n\nThree.",
            "actionableSteps": steps,
        });
        format!("```json\n{}\n```", body)
    }

    fn orchestrator(provider: Arc<MockProvider>) -> BookSearchOrchestrator {
        BookSearchOrchestrator::with_analyzer(LlmBookAnalyzer::new(
            provider,
            AnalyzerSettings::default(),
        ))
    }

    #[tokio::test]
    async fn test_catalog_hit_makes_no_llm_call() {
        let provider = Arc::new(MockProvider::replying("unused"));
        let search = orchestrator(provider.clone());

        let outcome = search.search("  ATOMIC habits ").await;
        let book = outcome.result.book().unwrap();

        assert_eq!(Some(book), LocalCatalog::builtin().lookup("atomic habits"));
        assert_eq!(book.actionable_steps.len(), 7);
        assert!(
            book.actionable_steps
                .iter()
                .all(|s| s.day.as_deref().is_some_and(|d| !d.is_empty()))
        );
        assert!(outcome.diagnostic.is_none());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_policy_rejection_makes_no_llm_call() {
        let provider = Arc::new(MockProvider::replying(&plan_json(7)));
        let search = orchestrator(provider.clone());

        let outcome = search.search("fuck this book").await;

        assert!(!outcome.result.is_success());
        assert!(outcome.result.error().unwrap().contains("content policy"));
        assert_eq!(
            outcome.diagnostic.map(|d| d.kind()),
            Some(ErrorKind::PolicyRejection)
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_llm_path_success() {
        let provider = Arc::new(MockProvider::replying(&plan_json(7)));
        let search = orchestrator(provider.clone());

        let outcome = search.search("deep work").await;
        let book = outcome.result.book().unwrap();

        assert_eq!(book.author, "Cal Newport");
        assert_eq!(book.actionable_steps.len(), 7);
        assert!(book.actionable_steps.iter().all(|s| s.details.sentences.len() == 5));
        assert_eq!(
            book.cover_image_url.as_deref(),
            Some("https://covers.openlibrary.org/b/isbn/9781455586691-L.jpg")
        );
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_wrong_step_count_is_not_found() {
        let provider = Arc::new(MockProvider::replying(&plan_json(6)));
        let search = orchestrator(provider.clone());

        let outcome = search.search("Deep Work").await;

        assert_eq!(
            outcome.result.error(),
            Some(not_found_message("Deep Work").as_str())
        );
        let diagnostic = outcome.diagnostic.unwrap();
        assert_eq!(diagnostic.kind(), ErrorKind::MalformedResponse);
        assert!(diagnostic.raw_content().unwrap().contains("Cal Newport"));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_book_is_not_found() {
        let provider = Arc::new(MockProvider::replying("null"));
        let outcome = orchestrator(provider).search("Qwzx Plorb").await;

        assert_eq!(
            outcome.result.error(),
            Some(
                "Sorry, we couldn't find or analyze \"Qwzx Plorb\". Please try a different book title or check the spelling."
            )
        );
        assert_eq!(
            outcome.diagnostic.map(|d| d.kind()),
            Some(ErrorKind::MalformedResponse)
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_found_without_retry() {
        let provider = Arc::new(MockProvider::failing(|| LlmError::Timeout { seconds: 30 }));
        let search = orchestrator(provider.clone());

        let outcome = search.search("Deep Work").await;

        assert!(outcome.result.book().is_none());
        assert_eq!(
            outcome.diagnostic.map(|d| d.kind()),
            Some(ErrorKind::Transport)
        );
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_analyzer_still_serves_catalog() {
        let search =
            BookSearchOrchestrator::with_analyzer(LlmBookAnalyzer::unconfigured("no key"));

        assert!(search.search("Think and Grow Rich").await.result.is_success());

        let outcome = search.search("Deep Work").await;
        assert!(!outcome.result.is_success());
        assert_eq!(
            outcome.diagnostic.map(|d| d.kind()),
            Some(ErrorKind::Configuration)
        );
    }

    #[tokio::test]
    async fn test_empty_title_skips_substring_match() {
        let provider = Arc::new(MockProvider::replying("null"));
        let search = orchestrator(provider.clone());

        let outcome = search.search("   ").await;

        assert!(!outcome.result.is_success());
        assert_eq!(provider.call_count(), 1);
    }
}
