//! # PDF Text Extract
//!
//! One-shot text extraction for PDF documents, reported as a single JSON line.
//!
//! ## Features
//!
//! - **Total extraction**: [`Extractor::extract`] never fails; parser errors,
//!   parser panics and empty documents become [`ExtractionResult::Failure`]
//! - **Whitespace normalization**: every whitespace run collapses to one space
//! - **Pluggable backends**: in-process `pdf-extract` or Poppler's `pdftotext`
//!   behind the [`ContentParser`] trait
//! - **Stable wire format**: `{"success": true, "text": ...}` or
//!   `{"success": false, "error": ...}`
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_text_extract::{Extractor, ExtractorConfig};
//!
//! let extractor = Extractor::new(&ExtractorConfig::default());
//! let result = extractor.extract("paper.pdf");
//! match result.text() {
//!     Some(text) => println!("{}", text),
//!     None => eprintln!("{}", result.error().unwrap_or_default()),
//! }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Parsing backends
pub mod parser;

// Text cleanup
pub mod normalize;

// Extraction and its outcome
pub mod extractor;
pub mod result;

// Wire format and entry points
pub mod cli;
pub mod client;
pub mod output;

// Re-exports
pub use config::{Backend, ExtractorConfig};
pub use error::{Error, Result};
pub use extractor::{extract, Extractor};
pub use parser::{ContentParser, ParsedContent};
pub use result::ExtractionResult;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
