//! Turning untrusted assistant text into a validated [`Book`].

pub mod backfill;
mod raw;
pub mod repair;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cover;
use crate::error::PipelineError;
use crate::model::{Book, WEEKDAYS};
use raw::RawBook;

/// How much of the 7-day plan shape is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Exactly 7 steps, each with step and chapter, Monday through Sunday in order
    #[default]
    Strict,
    /// Any number of steps; only the step text is required
    Lenient,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseNormalizer {
    validation: Validation,
}

impl ResponseNormalizer {
    pub fn new(validation: Validation) -> Self {
        Self { validation }
    }

    pub fn strict() -> Self {
        Self::new(Validation::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(Validation::Lenient)
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Normalize assistant output, logging and discarding the failure cause.
    pub fn normalize(&self, raw: &str) -> Option<Book> {
        match self.normalize_detailed(raw) {
            Ok(book) => Some(book),
            Err(err) => {
                warn!("{}", err);
                debug!("Raw content: {}", raw);
                None
            }
        }
    }

    /// Normalize assistant output: strip fences, repair, parse, validate,
    /// backfill step details and attach a cover URL.
    pub fn normalize_detailed(&self, raw: &str) -> Result<Book, PipelineError> {
        let cleaned = repair::clean_response(raw);

        let value: Value = serde_json::from_str(&cleaned)
            .map_err(|e| PipelineError::malformed(format!("invalid JSON: {}", e), raw))?;

        match &value {
            Value::Object(_) => {}
            Value::Null => {
                return Err(PipelineError::malformed(
                    "model did not recognize the book",
                    raw,
                ));
            }
            _ => return Err(PipelineError::malformed("expected a JSON object", raw)),
        }

        let book: RawBook = serde_json::from_value(value)
            .map_err(|e| PipelineError::malformed(format!("unexpected shape: {}", e), raw))?;

        self.build(book)
            .map_err(|reason| PipelineError::malformed(reason, raw))
    }

    fn build(&self, book: RawBook) -> Result<Book, String> {
        let title = required(book.title, "title")?;
        let author = required(book.author, "author")?;
        let summary = required(book.summary, "summary")?;
        let steps = book
            .actionable_steps
            .ok_or_else(|| "missing required field: actionableSteps".to_string())?;

        let strict = self.validation == Validation::Strict;
        if strict && steps.len() != WEEKDAYS.len() {
            return Err(format!(
                "expected exactly {} actionable steps, got {}",
                WEEKDAYS.len(),
                steps.len()
            ));
        }

        for (index, step) in steps.iter().enumerate() {
            if let Some(field) = step.missing_field(strict) {
                return Err(format!("actionable step {} is missing {}", index + 1, field));
            }
            if strict {
                let expected = WEEKDAYS[index];
                let day = step.day().unwrap_or_default();
                if !day.eq_ignore_ascii_case(expected) {
                    return Err(format!(
                        "actionable step {} should be {}, got {}",
                        index + 1,
                        expected,
                        day
                    ));
                }
            }
        }

        let cover_image_url = cover::resolve(book.isbn.as_deref(), Some(&title));

        Ok(Book {
            actionable_steps: steps.into_iter().map(|s| s.into_step()).collect(),
            cover_image_url: Some(cover_image_url),
            published_year: book.published_year,
            genre: book.genre,
            isbn: book.isbn,
            title,
            author,
            summary,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, String> {
    value.ok_or_else(|| format!("missing required field: {}", field))
}
