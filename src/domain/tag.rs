//! Tag parsing and matching.
//!
//! Tags are stored exactly as the user typed them (minus surrounding
//! whitespace). Matching is case-insensitive; storage is not normalized.

/// Splits a comma-separated line into tags.
///
/// Every segment is trimmed and kept, including empty ones, so an empty line
/// yields a single empty tag and `"a,,b"` yields three tags.
///
/// # Examples
///
/// ```
/// use jot::domain::parse_tags;
///
/// assert_eq!(parse_tags("a, b ,c"), vec!["a", "b", "c"]);
/// assert_eq!(parse_tags(""), vec![""]);
/// ```
pub fn parse_tags(input: &str) -> Vec<String> {
    input.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Returns true if `tag` contains `query`, ignoring case.
pub fn tag_contains(tag: &str, query: &str) -> bool {
    tag.to_lowercase().contains(&query.to_lowercase())
}

/// Returns true if the tag list carries no real tags (only the empty tag
/// produced by a blank input line, or nothing at all).
pub fn is_blank(tags: &[String]) -> bool {
    tags.iter().all(|t| t.is_empty())
}
