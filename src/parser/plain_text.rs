//! Passthrough backend for files that are already text.

use super::{ContentParser, ParsedContent};
use crate::error::Result;
use std::path::Path;

/// Reads the file as UTF-8, replacing invalid sequences with U+FFFD.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl ContentParser for PlainTextParser {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn parse(&self, path: &Path) -> Result<ParsedContent> {
        let bytes = std::fs::read(path)?;
        Ok(ParsedContent::from_text(String::from_utf8_lossy(&bytes)))
    }
}
