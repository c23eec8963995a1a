//! Text extraction entry point.
//!
//! [`Extractor::extract`] is total: whatever happens inside the parsing
//! backend, the caller gets an [`ExtractionResult`] back.

use crate::config::{Backend, ExtractorConfig};
use crate::error::{Error, Result};
use crate::normalize::{is_blank, normalize_whitespace};
use crate::parser::{
    detect_format, panic_message, ContentParser, DocumentFormat, PdfExtractParser,
    PdftotextParser, PlainTextParser,
};
use crate::result::ExtractionResult;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

/// Extracts normalized text from documents.
pub struct Extractor {
    pdf_parser: Box<dyn ContentParser>,
    plain_text_passthrough: bool,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("pdf_parser", &self.pdf_parser.name())
            .field("plain_text_passthrough", &self.plain_text_passthrough)
            .finish()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}

impl Extractor {
    /// Build an extractor from configuration.
    pub fn new(config: &ExtractorConfig) -> Self {
        let pdf_parser: Box<dyn ContentParser> = match config.backend {
            Backend::PdfExtract => Box::new(PdfExtractParser::new()),
            Backend::Pdftotext => Box::new(PdftotextParser::new(config.pdftotext_program.clone())),
        };
        Self {
            pdf_parser,
            plain_text_passthrough: config.plain_text_passthrough,
        }
    }

    /// Build an extractor around a custom PDF parser.
    pub fn with_parser<P: ContentParser + 'static>(parser: P) -> Self {
        Self {
            pdf_parser: Box::new(parser),
            plain_text_passthrough: false,
        }
    }

    /// Extract text from the file at `path`.
    ///
    /// Never fails: parser errors, panics, and empty documents all come back
    /// as [`ExtractionResult::Failure`].
    pub fn extract(&self, path: impl AsRef<Path>) -> ExtractionResult {
        let path = path.as_ref();
        let result = self.try_extract(path);
        if let Err(e) = &result {
            log::info!("Extraction failed for {}: {}", path.display(), e);
        }
        result.into()
    }

    /// Extract text from the file at `path`, returning errors as `Err`.
    pub fn try_extract(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let parser = self.parser_for(path)?;
        log::debug!("Parsing {} with {}", path.display(), parser.name());

        let parsed = catch_unwind(AssertUnwindSafe(|| parser.parse(path)))
            .map_err(|payload| Error::BackendPanic(panic_message(payload.as_ref())))??;
        match parsed.content {
            Some(text) if !is_blank(&text) => Ok(normalize_whitespace(&text)),
            _ => Err(Error::NoContent),
        }
    }

    fn parser_for(&self, path: &Path) -> Result<&dyn ContentParser> {
        if !self.plain_text_passthrough {
            return Ok(&*self.pdf_parser);
        }
        let parser: &dyn ContentParser = match detect_format(path)? {
            DocumentFormat::PlainText => &PlainTextParser,
            DocumentFormat::Pdf | DocumentFormat::Unknown => &*self.pdf_parser,
        };
        Ok(parser)
    }
}

/// Extract text from `path` with the default configuration.
pub fn extract(path: impl AsRef<Path>) -> ExtractionResult {
    Extractor::default().extract(path)
}
