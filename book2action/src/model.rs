//! Book value types shared by the catalog, the normalizer and callers.

use serde::{Deserialize, Serialize};

/// Day names of a 7-day plan, in plan order.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Elaboration attached to every normalized step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDetails {
    pub sentences: Vec<String>,
    pub key_takeaway: String,
}

/// One day of the action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionableStep {
    /// The instruction
    pub step: String,
    /// Source reference inside the book
    pub chapter: String,
    /// Weekday name; absent only for legacy-shaped steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    pub details: StepDetails,
}

/// A fully-populated book. Constructed fresh per search and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Free text; paragraphs separated by a blank line
    pub summary: String,
    pub actionable_steps: Vec<ActionableStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

impl Book {
    /// Summary split on blank lines, for "show more" style rendering.
    pub fn summary_paragraphs(&self) -> Vec<&str> {
        self.summary
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// The step scheduled for `day`, compared case-insensitively.
    pub fn step_for_day(&self, day: &str) -> Option<&ActionableStep> {
        self.actionable_steps.iter().find(|s| {
            s.day
                .as_deref()
                .is_some_and(|d| d.eq_ignore_ascii_case(day))
        })
    }
}

/// The only shape handed to the presentation layer.
///
/// Serializes as `{"success": true, "book": ...}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookSearchResult {
    Found(Book),
    NotFound { error: String },
}

impl BookSearchResult {
    pub fn not_found(error: impl Into<String>) -> Self {
        Self::NotFound {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn book(&self) -> Option<&Book> {
        match self {
            Self::Found(book) => Some(book),
            Self::NotFound { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Found(_) => None,
            Self::NotFound { error } => Some(error),
        }
    }

    pub fn into_book(self) -> Option<Book> {
        match self {
            Self::Found(book) => Some(book),
            Self::NotFound { .. } => None,
        }
    }
}

#[derive(Serialize)]
struct WireResult<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    book: Option<&'a Book>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Serialize for BookSearchResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireResult {
            success: self.is_success(),
            book: self.book(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}
