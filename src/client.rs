//! Parent-side helper for running the extractor as a child process.
//!
//! Services that keep document parsing out of their own address space spawn
//! `extract_pdf_text` per file and read back its JSON line.

use crate::error::{Error, Result};
use crate::result::ExtractionResult;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Runs an extractor executable and decodes its output.
#[derive(Debug, Clone)]
pub struct ExtractorProcess {
    program: PathBuf,
    envs: Vec<(String, String)>,
}

impl ExtractorProcess {
    /// Use `program` as the extractor executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            envs: Vec::new(),
        }
    }

    /// Set an environment variable for the child, e.g. `PDF_TEXT_BACKEND`.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Extract the text of `path` in a child process.
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        log::debug!("Spawning {} for {}", self.program.display(), path.display());

        let output = Command::new(&self.program)
            .arg(path)
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .output()
            .map_err(|source| Error::BackendUnavailable {
                program: self.program.clone(),
                source,
            })?;

        self.decode(output)
    }

    fn decode(&self, output: Output) -> Result<String> {
        let stdout = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            // The usage error still carries a JSON message on stdout.
            let stderr = match serde_json::from_str::<ExtractionResult>(stdout.trim()) {
                Ok(ExtractionResult::Failure { error }) => error,
                _ => String::from_utf8_lossy(&output.stderr).trim().to_string(),
            };
            return Err(Error::Subprocess {
                program: self.program.clone(),
                status: output.status,
                stderr,
            });
        }

        parse_output(&stdout)?.into_result()
    }
}

/// Decode the JSON line printed by the extractor.
pub fn parse_output(stdout: &str) -> Result<ExtractionResult> {
    let line = stdout.trim();
    serde_json::from_str(line).map_err(|e| Error::ProcessOutput(e.to_string()))
}
