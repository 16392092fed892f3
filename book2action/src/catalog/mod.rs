//! The bundled catalog consulted before any paid LLM call.

mod builtin;

use crate::model::Book;

struct CatalogEntry {
    key: String,
    book: Book,
}

/// Read-only, ordered title → book table.
pub struct LocalCatalog {
    entries: Vec<CatalogEntry>,
}

impl LocalCatalog {
    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self::from_books(builtin::books())
    }

    /// Build a catalog keyed by lowercase title. Declaration order is kept
    /// and decides substring ties.
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let entries = books
            .into_iter()
            .map(|book| CatalogEntry {
                key: book.title.trim().to_lowercase(),
                book,
            })
            .collect();
        Self { entries }
    }

    /// Look up an already trimmed, lowercased title.
    ///
    /// Exact key match first; otherwise the first entry, in declaration
    /// order, whose key contains the query or is contained by it.
    pub fn lookup(&self, normalized_title: &str) -> Option<&Book> {
        if let Some(entry) = self.entries.iter().find(|e| e.key == normalized_title) {
            return Some(&entry.book);
        }

        if normalized_title.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|e| e.key.contains(normalized_title) || normalized_title.contains(&e.key))
            .map(|e| &e.book)
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.entries.iter().map(|e| &e.book)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WEEKDAYS;
    use crate::normalize::backfill;

    fn stub(title: &str) -> Book {
        Book {
            title: title.to_string(),
            author: "Someone".to_string(),
            summary: "Summary".to_string(),
            actionable_steps: Vec::new(),
            cover_image_url: None,
            published_year: None,
            genre: None,
            isbn: None,
        }
    }

    #[test]
    fn test_exact_match() {
        let catalog = LocalCatalog::builtin();
        let book = catalog.lookup("atomic habits").unwrap();
        assert_eq!(book.author, "James Clear");
    }

    #[test]
    fn test_substring_match_both_directions() {
        let catalog = LocalCatalog::builtin();
        assert_eq!(
            catalog.lookup("7 habits").unwrap().title,
            "The 7 Habits of Highly Effective People"
        );
        assert_eq!(
            catalog.lookup("think and grow rich by napoleon hill").unwrap().title,
            "Think and Grow Rich"
        );
    }

    #[test]
    fn test_exact_match_beats_earlier_substring_match() {
        let catalog = LocalCatalog::from_books([stub("Habits of Mind"), stub("Habits")]);
        assert_eq!(catalog.lookup("habits").unwrap().title, "Habits");
    }

    #[test]
    fn test_first_declared_substring_match_wins() {
        let catalog = LocalCatalog::from_books([stub("Atomic Habits"), stub("The 7 Habits")]);
        assert_eq!(catalog.lookup("habits").unwrap().title, "Atomic Habits");

        let reversed = LocalCatalog::from_books([stub("The 7 Habits"), stub("Atomic Habits")]);
        assert_eq!(reversed.lookup("habits").unwrap().title, "The 7 Habits");
    }

    #[test]
    fn test_miss_and_empty_query() {
        let catalog = LocalCatalog::builtin();
        assert!(catalog.lookup("deep work").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn test_builtin_books_are_complete_plans() {
        let catalog = LocalCatalog::builtin();
        assert_eq!(catalog.len(), 3);

        for book in catalog.books() {
            assert_eq!(book.actionable_steps.len(), 7, "{}", book.title);
            assert_eq!(book.summary_paragraphs().len(), 3, "{}", book.title);
            assert_eq!(book.isbn.as_deref().map(str::len), Some(13));
            assert_eq!(
                book.cover_image_url,
                Some(crate::cover::resolve(book.isbn.as_deref(), Some(&book.title)))
            );

            for (step, day) in book.actionable_steps.iter().zip(WEEKDAYS) {
                assert_eq!(step.day.as_deref(), Some(day));
                assert_eq!(step.details, backfill::details_for(&step.step, &step.chapter));
            }
        }
    }
}
