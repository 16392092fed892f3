//! Textual clean-up of assistant output before JSON parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static REPEATED_COMMAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",(?:\s*,)+").expect("repeated comma pattern is valid"));

static TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([}\]])").expect("trailing comma pattern is valid"));

/// Strip one leading and one trailing triple-backtick fence, with or without
/// a `json` language tag.
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```") {
        let rest = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        body = rest;
        if let Some(inner) = body.trim_end().strip_suffix("```") {
            body = inner;
        }
    }

    body.trim()
}

/// Apply the heuristic repairs, in order: drop stray backticks, collapse runs
/// of commas, drop commas before a closing brace or bracket, and cut any
/// prose around the outermost object.
///
/// The repairs are textual and also touch string contents, so only run them
/// on text that does not already parse.
pub fn repair_json(text: &str) -> String {
    let text = text.replace('`', "");
    let text = REPEATED_COMMAS.replace_all(&text, ",");
    let text = TRAILING_COMMA.replace_all(&text, "$1");
    outermost_object(&text).to_string()
}

/// Slice from the first `{` to the last `}`. Text without a brace pair is
/// returned trimmed.
fn outermost_object(text: &str) -> &str {
    let trimmed = text.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if end > start => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// Fence stripping and prose trimming, then repair if the result still does
/// not parse. Valid JSON passes through with its string values untouched.
pub fn clean_response(raw: &str) -> String {
    let candidate = outermost_object(strip_code_fence(raw));
    if serde_json::from_str::<serde_json::Value>(candidate).is_ok() {
        return candidate.to_string();
    }
    repair_json(candidate)
}
