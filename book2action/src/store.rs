//! The single "current book" slot shown to the user.

use log::debug;

use crate::model::{Book, BookSearchResult};

/// Identifies one search. Only the most recently issued token may update
/// the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct SearchStore {
    current_book: Option<Book>,
    is_loading: bool,
    error: Option<String>,
    search_title: String,
    latest: u64,
}

impl SearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_book(&self) -> Option<&Book> {
        self.current_book.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_title(&self) -> &str {
        &self.search_title
    }

    /// Start a search for `title`. Any earlier token becomes stale.
    pub fn begin(&mut self, title: &str) -> RequestToken {
        self.latest += 1;
        self.search_title = title.to_string();
        self.is_loading = true;
        self.error = None;
        RequestToken(self.latest)
    }

    /// Apply a finished search. Returns false, leaving the store untouched,
    /// when `token` has been superseded.
    pub fn complete(&mut self, token: RequestToken, result: BookSearchResult) -> bool {
        if token.0 != self.latest {
            debug!(
                "Discarding stale search result (token {}, latest {})",
                token.0, self.latest
            );
            return false;
        }

        match result {
            BookSearchResult::Found(book) => {
                self.current_book = Some(book);
                self.error = None;
            }
            BookSearchResult::NotFound { error } => {
                self.current_book = None;
                self.error = Some(error);
            }
        }
        self.is_loading = false;
        true
    }

    /// Clear everything. Searches still in flight are treated as stale.
    pub fn reset(&mut self) {
        self.current_book = None;
        self.is_loading = false;
        self.error = None;
        self.search_title.clear();
        self.latest += 1;
    }
}
