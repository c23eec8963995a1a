//! Extract the text of a PDF and print it as a single JSON line.
//!
//! Usage:
//!   extract_pdf_text <pdf_path>
//!
//! Output is `{"success": true, "text": ...}` or `{"success": false, "error": ...}`.
//! Set `PDF_TEXT_BACKEND=pdftotext` to parse with Poppler instead of the
//! built-in parser, and `RUST_LOG=debug` for diagnostics on stderr.

use pdf_text_extract::cli;
use pdf_text_extract::config::ExtractorConfig;

/// Exit status when the result line itself cannot be written.
const EXIT_WRITE_FAILURE: i32 = 1;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut stdout = std::io::stdout().lock();
    match cli::run(std::env::args_os().skip(1), ExtractorConfig::from_env, &mut stdout) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            log::error!("Failed to write result: {}", e);
            std::process::exit(EXIT_WRITE_FAILURE);
        },
    }
}
