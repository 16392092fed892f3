//! Purchase links.

/// Amazon search link: a precise ISBN search when one is known, otherwise a
/// "{title} {author} book" query.
pub fn amazon_link(title: &str, author: &str, isbn: Option<&str>) -> String {
    let query = match isbn.map(str::trim).filter(|i| !i.is_empty()) {
        Some(isbn) => isbn.to_string(),
        None => format!("{} {} book", title, author),
    };
    format!("https://www.amazon.com/s?k={}", urlencoding::encode(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn_search() {
        assert_eq!(
            amazon_link("Outliers", "Malcolm Gladwell", Some("9780316017930")),
            "https://www.amazon.com/s?k=9780316017930"
        );
    }

    #[test]
    fn test_title_author_search() {
        assert_eq!(
            amazon_link("Grit", "Angela Duckworth", None),
            "https://www.amazon.com/s?k=Grit%20Angela%20Duckworth%20book"
        );
    }
}
