//! Render-time text cleanup.
//!
//! Pitch scripts are written in markdown, so content lines routinely
//! carry `**emphasis**` markers. The deck renders styling through the
//! theme instead, so the markers are stripped (keeping the inner text)
//! just before a string reaches a slide.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `**bold**` spans, capturing the inner text.
static EMPHASIS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Remove `**emphasis**` markers from a line, keeping the text, and trim.
pub fn strip_emphasis(text: &str) -> String {
    EMPHASIS_REGEX.replace_all(text, "$1").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_bold_markers() {
        assert_eq!(strip_emphasis("**Hello** world"), "Hello world");
    }

    #[test]
    fn test_strips_multiple_spans() {
        assert_eq!(strip_emphasis("**a** and **b**"), "a and b");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(strip_emphasis("no markers here"), "no markers here");
    }

    #[test]
    fn test_unpaired_markers_are_kept() {
        // A lone `**` is literal text, not an emphasis span.
        assert_eq!(strip_emphasis("2 ** 10"), "2 ** 10");
    }

    #[test]
    fn test_trims_result() {
        assert_eq!(strip_emphasis("  **padded**  "), "padded");
    }
}
