//! In-process PDF backend built on the `pdf-extract` crate.

use super::{panic_message, ContentParser, ParsedContent};
use crate::error::{Error, Result};
use gag::Redirect;
use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

/// Extracts text with `pdf_extract::extract_text_from_mem`.
///
/// `pdf-extract` panics on some malformed inputs (unsupported encodings,
/// truncated streams). Panics are caught and reported as [`Error::BackendPanic`].
///
/// It also `println!`s font diagnostics. Standard output is redirected to
/// standard error for the duration of the call so that nothing but the result
/// line ever reaches stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractParser;

impl PdfExtractParser {
    /// Create the parser.
    pub fn new() -> Self {
        Self
    }

    /// Extract text from an in-memory PDF.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<ParsedContent> {
        let outcome = {
            // Anything already buffered belongs to the caller, not to stderr.
            let _ = std::io::stdout().flush();
            // Only one redirect per stream can be live; a concurrent call runs unredirected.
            let redirect = Redirect::stdout(std::io::stderr()).ok();
            if redirect.is_none() {
                log::debug!("stdout already redirected, leaving it in place for pdf-extract");
            }
            let outcome =
                catch_unwind(AssertUnwindSafe(|| ::pdf_extract::extract_text_from_mem(bytes)));
            let _ = std::io::stdout().flush();
            drop(redirect);
            outcome
        };

        match outcome {
            Ok(Ok(text)) => {
                log::debug!("pdf-extract produced {} bytes of text", text.len());
                Ok(ParsedContent::from_text(text))
            },
            Ok(Err(e)) => Err(Error::Parse(e.to_string())),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::warn!("pdf-extract panicked: {}", message);
                Err(Error::BackendPanic(message))
            },
        }
    }
}

impl ContentParser for PdfExtractParser {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn parse(&self, path: &Path) -> Result<ParsedContent> {
        let bytes = std::fs::read(path)?;
        self.parse_bytes(&bytes)
    }
}
