//! Configuration for text extraction.

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable selecting the PDF backend.
pub const BACKEND_ENV: &str = "PDF_TEXT_BACKEND";

/// Environment variable overriding the `pdftotext` program path.
pub const PDFTOTEXT_ENV: &str = "PDFTOTEXT_BIN";

/// Which parser handles PDF documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// In-process extraction with the `pdf-extract` crate.
    #[default]
    PdfExtract,
    /// Poppler's `pdftotext`, run as a child process.
    Pdftotext,
}

impl Backend {
    /// Name accepted by [`Backend::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Backend::PdfExtract => "pdf-extract",
            Backend::Pdftotext => "pdftotext",
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf-extract" | "pdf_extract" => Ok(Backend::PdfExtract),
            "pdftotext" => Ok(Backend::Pdftotext),
            other => Err(Error::InvalidConfig(format!(
                "unknown backend '{}' (expected 'pdf-extract' or 'pdftotext')",
                other
            ))),
        }
    }
}

/// Text extraction configuration.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Parser used for PDF documents.
    pub backend: Backend,

    /// Program run by the `pdftotext` backend.
    pub pdftotext_program: PathBuf,

    /// Read `.txt` files directly instead of handing them to the PDF backend.
    pub plain_text_passthrough: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            backend: Backend::default(),
            pdftotext_program: PathBuf::from("pdftotext"),
            plain_text_passthrough: true,
        }
    }

    /// Load configuration from `PDF_TEXT_BACKEND` and `PDFTOTEXT_BIN`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::new();
        if let Some(name) = get(BACKEND_ENV) {
            config.backend = name.parse()?;
        }
        if let Some(program) = get(PDFTOTEXT_ENV) {
            config.pdftotext_program = PathBuf::from(program);
        }

        log::debug!(
            "Extractor config: backend={}, pdftotext={}",
            config.backend.name(),
            config.pdftotext_program.display()
        );
        Ok(config)
    }

    /// Select the PDF backend.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Set the program run by the `pdftotext` backend.
    pub fn with_pdftotext_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.pdftotext_program = program.into();
        self
    }

    /// Enable or disable plain-text passthrough.
    pub fn with_plain_text_passthrough(mut self, enable: bool) -> Self {
        self.plain_text_passthrough = enable;
        self
    }
}
