//! Content policy for search titles.

/// Substrings that make a title unsearchable.
pub const DENYLIST: &[&str] = &["f*ck", "fuck", "shit", "damn", "ass", "bitch", "crap"];

/// True when `title` contains none of the denylisted substrings.
///
/// Plain substring containment after lowercasing, so "class" or "assistant"
/// are rejected too.
pub fn is_appropriate(title: &str) -> bool {
    let lowered = title.to_lowercase();
    !DENYLIST.iter().any(|word| lowered.contains(word))
}
