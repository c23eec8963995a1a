//! The extraction outcome reported to callers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Outcome of one extraction.
///
/// On the wire this is a flat object keyed by a `success` flag:
/// `{"success": true, "text": ...}` or `{"success": false, "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireResult", try_from = "WireResult")]
pub enum ExtractionResult {
    /// Non-empty, whitespace-normalized text
    Success {
        /// Extracted text
        text: String,
    },
    /// Human-readable reason extraction failed
    Failure {
        /// Error message
        error: String,
    },
}

impl ExtractionResult {
    /// Successful result carrying `text`.
    pub fn success(text: impl Into<String>) -> Self {
        ExtractionResult::Success { text: text.into() }
    }

    /// Failed result carrying `error`.
    pub fn failure(error: impl Into<String>) -> Self {
        ExtractionResult::Failure {
            error: error.into(),
        }
    }

    /// True for [`ExtractionResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success { .. })
    }

    /// Extracted text, if successful.
    pub fn text(&self) -> Option<&str> {
        match self {
            ExtractionResult::Success { text } => Some(text),
            ExtractionResult::Failure { .. } => None,
        }
    }

    /// Error message, if failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            ExtractionResult::Success { .. } => None,
            ExtractionResult::Failure { error } => Some(error),
        }
    }

    /// Convert into a `Result`, mapping failures to [`Error::Parse`].
    pub fn into_result(self) -> Result<String> {
        match self {
            ExtractionResult::Success { text } => Ok(text),
            ExtractionResult::Failure { error } => Err(Error::Parse(error)),
        }
    }
}

impl From<Result<String>> for ExtractionResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => ExtractionResult::success(text),
            Err(e) => ExtractionResult::failure(e.to_string()),
        }
    }
}

/// Flat serde shape of [`ExtractionResult`].
#[derive(Debug, Serialize, Deserialize)]
struct WireResult {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<ExtractionResult> for WireResult {
    fn from(result: ExtractionResult) -> Self {
        match result {
            ExtractionResult::Success { text } => WireResult {
                success: true,
                text: Some(text),
                error: None,
            },
            ExtractionResult::Failure { error } => WireResult {
                success: false,
                text: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<WireResult> for ExtractionResult {
    type Error = String;

    fn try_from(wire: WireResult) -> std::result::Result<Self, String> {
        match (wire.success, wire.text, wire.error) {
            (true, Some(text), _) => Ok(ExtractionResult::Success { text }),
            (true, None, _) => Err("successful result without a \"text\" field".to_string()),
            // A failure with no message still counts as a failure.
            (false, _, error) => Ok(ExtractionResult::Failure {
                error: error.unwrap_or_else(|| "Unknown error in PDF extraction".to_string()),
            }),
        }
    }
}
