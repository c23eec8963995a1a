//! Error types for text extraction.
//!
//! Every failure the extractor can hit is a variant here. The extractor turns
//! them into failure results using their `Display` output, so the messages are
//! what callers of the binary end up reading.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wrong number of command-line arguments
    #[error("Please provide PDF file path")]
    Usage,

    /// The document parsed, but carried no text
    #[error("No text content found")]
    NoContent,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The parsing backend rejected the document
    #[error("{0}")]
    Parse(String),

    /// The parsing backend panicked
    #[error("PDF parser panicked: {0}")]
    BackendPanic(String),

    /// An external parser program could not be started
    #[error("Failed to run {}: {source}", .program.display())]
    BackendUnavailable {
        /// Program that was spawned
        program: PathBuf,
        /// Spawn error
        source: std::io::Error,
    },

    /// A child process exited unsuccessfully
    #[error("{} exited with {status}: {stderr}", .program.display())]
    Subprocess {
        /// Program that was run
        program: PathBuf,
        /// Exit status of the child
        status: ExitStatus,
        /// Trimmed standard error of the child
        stderr: String,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A child extractor printed something that is not a result line
    #[error("Failed to parse extractor output: {0}")]
    ProcessOutput(String),
}
