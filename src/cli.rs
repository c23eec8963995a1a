//! Command-line entry point.
//!
//! `extract_pdf_text <pdf_path>` prints exactly one JSON line on stdout.
//! Exit status is 1 only for a wrong argument count; extraction failures are
//! reported in the JSON body with status 0.

use crate::config::ExtractorConfig;
use crate::error::{Error, Result};
use crate::extractor::Extractor;
use crate::output::write_result;
use crate::result::ExtractionResult;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

/// Exit status for a successful run, including failed extractions.
pub const EXIT_OK: i32 = 0;

/// Exit status for a wrong argument count.
pub const EXIT_USAGE: i32 = 1;

/// Pull the single document path out of the arguments (program name excluded).
pub fn parse_args<I>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(Error::Usage),
    }
}

/// Run the tool: parse `args`, extract, write the JSON line to `out`.
///
/// `args` excludes the program name. `config` is only consulted once the
/// argument check passes. Returns the process exit status.
pub fn run<I, W, C>(args: I, config: C, out: &mut W) -> Result<i32>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    C: FnOnce() -> Result<ExtractorConfig>,
{
    let path = match parse_args(args) {
        Ok(path) => path,
        Err(e) => {
            write_result(out, &ExtractionResult::failure(e.to_string()))?;
            return Ok(EXIT_USAGE);
        },
    };

    let result = match config() {
        Ok(config) => Extractor::new(&config).extract(&path),
        Err(e) => ExtractionResult::failure(e.to_string()),
    };

    write_result(out, &result)?;
    Ok(EXIT_OK)
}
