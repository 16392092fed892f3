//! Rotating "trending books" suggestions.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::cover;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingBook {
    pub title: &'static str,
    pub author: &'static str,
    pub isbn: &'static str,
}

impl TrendingBook {
    const fn new(title: &'static str, author: &'static str, isbn: &'static str) -> Self {
        Self {
            title,
            author,
            isbn,
        }
    }

    pub fn cover_image_url(&self) -> String {
        cover::resolve(Some(self.isbn), Some(self.title))
    }
}

/// Suggestions shown on the landing screen. The first three are catalog books.
pub const TRENDING_BOOKS: &[TrendingBook] = &[
    TrendingBook::new("Atomic Habits", "James Clear", "9780735211292"),
    TrendingBook::new("Think and Grow Rich", "Napoleon Hill", "9781585424337"),
    TrendingBook::new(
        "The 7 Habits of Highly Effective People",
        "Stephen R. Covey",
        "9781982137274",
    ),
    TrendingBook::new("Rich Dad, Poor Dad", "Robert T. Kiyosaki", "9781612680194"),
    TrendingBook::new(
        "How to Win Friends and Influence People",
        "Dale Carnegie",
        "9780671027032",
    ),
    TrendingBook::new("The 4-Hour Workweek", "Timothy Ferriss", "9780307465351"),
    TrendingBook::new("The Power of Now", "Eckhart Tolle", "9781577314806"),
    TrendingBook::new("Outliers", "Malcolm Gladwell", "9780316017930"),
    TrendingBook::new("The Alchemist", "Paulo Coelho", "9780061122415"),
    TrendingBook::new("Deep Work", "Cal Newport", "9781455586691"),
    TrendingBook::new("Mindset", "Carol S. Dweck", "9780345472328"),
    TrendingBook::new("Start with Why", "Simon Sinek", "9781591846444"),
    TrendingBook::new("Sapiens", "Yuval Noah Harari", "9780062316097"),
    TrendingBook::new("Man's Search for Meaning", "Viktor E. Frankl", "9780807014271"),
    TrendingBook::new("The Lean Startup", "Eric Ries", "9780307887894"),
    TrendingBook::new("Zero to One", "Peter Thiel", "9780804139298"),
    TrendingBook::new("Daring Greatly", "Brené Brown", "9781592407330"),
    TrendingBook::new("Thinking, Fast and Slow", "Daniel Kahneman", "9780374533557"),
    TrendingBook::new("Good to Great", "Jim Collins", "9780066620992"),
    TrendingBook::new("Grit", "Angela Duckworth", "9781501111105"),
    TrendingBook::new("Essentialism", "Greg McKeown", "9780804137386"),
    TrendingBook::new("Leaders Eat Last", "Simon Sinek", "9781591845324"),
    TrendingBook::new("Emotional Intelligence", "Daniel Goleman", "9780553383713"),
    TrendingBook::new("Dare to Lead", "Brené Brown", "9780399592522"),
    TrendingBook::new("Everything Is Figureoutable", "Marie Forleo", "9780525534990"),
];

/// Shuffle `pool`, drop titles in `excluded`, and take up to `count`.
///
/// Pass the titles of the previous selection as `excluded` to avoid showing
/// the same book twice in a row. Returns fewer than `count` when the pool
/// runs out.
pub fn select_trending<'a, R: Rng + ?Sized>(
    pool: &'a [TrendingBook],
    count: usize,
    excluded: &HashSet<String>,
    rng: &mut R,
) -> Vec<&'a TrendingBook> {
    let mut shuffled: Vec<&TrendingBook> = pool.iter().collect();
    shuffled.shuffle(rng);

    shuffled
        .into_iter()
        .filter(|book| !excluded.contains(book.title))
        .take(count)
        .collect()
}

/// Titles of a selection, ready to be passed back as the next `excluded`.
pub fn titles(selection: &[&TrendingBook]) -> HashSet<String> {
    selection.iter().map(|b| b.title.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_selects_requested_count_without_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = select_trending(TRENDING_BOOKS, 5, &HashSet::new(), &mut rng);

        assert_eq!(picked.len(), 5);
        assert_eq!(titles(&picked).len(), 5);
    }

    #[test]
    fn test_consecutive_selections_do_not_repeat() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = select_trending(TRENDING_BOOKS, 5, &HashSet::new(), &mut rng);
        let excluded = titles(&first);
        let second = select_trending(TRENDING_BOOKS, 5, &excluded, &mut rng);

        assert_eq!(second.len(), 5);
        assert!(second.iter().all(|b| !excluded.contains(b.title)));
    }

    #[test]
    fn test_small_pool_returns_what_remains() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = &TRENDING_BOOKS[..4];
        let excluded: HashSet<String> = ["Atomic Habits".to_string()].into();

        let picked = select_trending(pool, 5, &excluded, &mut rng);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|b| b.title != "Atomic Habits"));
    }

    #[test]
    fn test_same_seed_same_selection() {
        let a = select_trending(TRENDING_BOOKS, 5, &HashSet::new(), &mut StdRng::seed_from_u64(9));
        let b = select_trending(TRENDING_BOOKS, 5, &HashSet::new(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pool_is_well_formed() {
        assert!(TRENDING_BOOKS.iter().all(|b| b.isbn.len() == 13));
        assert_eq!(
            TRENDING_BOOKS[0].cover_image_url(),
            "https://covers.openlibrary.org/b/isbn/9780735211292-L.jpg"
        );
    }
}
