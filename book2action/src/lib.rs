//! Book2Action - turn a book title into a summary and a 7-day action plan
//!
//! The pipeline behind a search:
//! - content policy check
//! - bundled catalog lookup (exact, then substring)
//! - LLM analysis for everything else
//! - tolerant JSON normalization with detail backfill and cover resolution
//!
//! Every failure collapses into [`BookSearchResult::NotFound`]; the structured
//! cause travels separately in [`SearchOutcome::diagnostic`].

pub mod analyzer;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod cover;
pub mod error;
pub mod links;
pub mod model;
pub mod normalize;
pub mod policy;
pub mod search;
pub mod secrets;
pub mod store;
pub mod trending;

pub use analyzer::{AnalyzerSettings, LlmBookAnalyzer};
pub use catalog::LocalCatalog;
pub use config::AppConfig;
pub use error::{ErrorKind, PipelineError};
pub use model::{ActionableStep, Book, BookSearchResult, StepDetails, WEEKDAYS};
pub use normalize::{ResponseNormalizer, Validation};
pub use search::{BookSearchOrchestrator, SearchOutcome};
pub use store::{RequestToken, SearchStore};
