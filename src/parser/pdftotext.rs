//! Out-of-process PDF backend that shells out to Poppler's `pdftotext`.

use super::{ContentParser, ParsedContent};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs `<program> -enc UTF-8 -q <path> -` and reads the text from stdout.
#[derive(Debug, Clone)]
pub struct PdftotextParser {
    program: PathBuf,
}

impl Default for PdftotextParser {
    fn default() -> Self {
        Self::new("pdftotext")
    }
}

impl PdftotextParser {
    /// Use `program` as the `pdftotext` executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ContentParser for PdftotextParser {
    fn name(&self) -> &'static str {
        "pdftotext"
    }

    fn parse(&self, path: &Path) -> Result<ParsedContent> {
        log::debug!("Running {} on {}", self.program.display(), path.display());

        let output = Command::new(&self.program)
            .args(["-enc", "UTF-8", "-q"])
            .arg(path)
            .arg("-")
            .output()
            .map_err(|source| Error::BackendUnavailable {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Subprocess {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(ParsedContent::from_text(String::from_utf8_lossy(&output.stdout)))
    }
}
