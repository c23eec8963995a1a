//! Whitespace normalization for extracted text.
//!
//! Extracted PDF text is full of layout whitespace: line breaks at the end of
//! every visual line, runs of spaces from justified text, form feeds between
//! pages. The extractor reports text as a single line, so every run collapses
//! to one space.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any run of whitespace, including the ASCII information separators
    /// (U+001C..U+001F) that line splitters treat as line boundaries.
    static ref RE_WHITESPACE_RUN: Regex = Regex::new(r"[\s\x1C-\x1F]+").unwrap();
}

/// Collapse every whitespace run to a single space and trim both ends.
///
/// # Examples
///
/// ```
/// use pdf_text_extract::normalize::normalize_whitespace;
///
/// let input = "  Quarterly\n\nReport\t 2024 \u{0c}";
/// assert_eq!(normalize_whitespace(input), "Quarterly Report 2024");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    RE_WHITESPACE_RUN.replace_all(text, " ").trim_matches(' ').to_string()
}

/// True if `text` has nothing left after normalization.
pub fn is_blank(text: &str) -> bool {
    match RE_WHITESPACE_RUN.find(text) {
        Some(m) => m.start() == 0 && m.end() == text.len(),
        None => text.is_empty(),
    }
}
