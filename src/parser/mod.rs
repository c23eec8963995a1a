//! Document parsing backends.
//!
//! A [`ContentParser`] turns a file on disk into raw, unnormalized content.
//! Backends may run in-process or spawn an external program; callers only see
//! the trait.

pub mod in_process;
pub mod pdftotext;
pub mod plain_text;

pub use in_process::PdfExtractParser;
pub use pdftotext::PdftotextParser;
pub use plain_text::PlainTextParser;

use crate::error::Result;
use std::any::Any;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Window searched for the `%PDF-` marker. Some producers put junk before it.
const HEADER_SEARCH_LEN: usize = 1024;

/// Raw output of a parsing backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContent {
    /// Extracted text, if the backend produced any.
    pub content: Option<String>,
}

impl ParsedContent {
    /// Content holding `text`.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
        }
    }

    /// Content with no text field at all.
    pub fn empty() -> Self {
        Self { content: None }
    }
}

/// Something that can pull text out of a document file.
pub trait ContentParser {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Parse the file at `path`.
    fn parse(&self, path: &Path) -> Result<ParsedContent>;
}

/// Coarse document type used to pick a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `%PDF-` header, or a `.pdf` extension
    Pdf,
    /// `.txt` or `.text` extension without a PDF header
    PlainText,
    /// Anything else
    Unknown,
}

/// Sniff the format of the file at `path`.
///
/// The header wins over the extension, so a mislabeled PDF still reaches a PDF
/// backend. Fails if the file cannot be opened.
pub fn detect_format(path: &Path) -> Result<DocumentFormat> {
    let mut head = Vec::with_capacity(HEADER_SEARCH_LEN);
    File::open(path)?
        .take(HEADER_SEARCH_LEN as u64)
        .read_to_end(&mut head)?;

    if head.windows(5).any(|w| w == b"%PDF-") {
        return Ok(DocumentFormat::Pdf);
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    Ok(match ext.as_deref() {
        Some("pdf") => DocumentFormat::Pdf,
        Some("txt") | Some("text") => DocumentFormat::PlainText,
        _ => DocumentFormat::Unknown,
    })
}

/// Best-effort text of a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
