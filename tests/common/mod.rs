//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Helvetica, one of the standard 14 fonts.
pub const HELVETICA: &str =
    "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>";

/// A non-standard font without `/Widths`. pdf-extract prints a warning to
/// stdout for it and falls back to default metrics.
pub const UNKNOWN_FONT_NO_WIDTHS: &str =
    "<< /Type /Font /Subtype /Type1 /BaseFont /CustomSans /Encoding /WinAnsiEncoding >>";

/// A font whose `/Widths` array disagrees with `/FirstChar`..`/LastChar`.
/// pdf-extract asserts on the mismatch.
pub const MISMATCHED_WIDTHS_FONT: &str = "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
     /FirstChar 32 /LastChar 99 /Widths [500] /Encoding /WinAnsiEncoding >>";

/// Build a single-page PDF that draws each entry of `lines` with Helvetica.
///
/// Offsets in the xref table are computed from the generated bytes, so the
/// result is a well-formed PDF 1.4 file.
pub fn single_page_pdf(lines: &[&str]) -> Vec<u8> {
    single_page_pdf_with_font(lines, HELVETICA)
}

/// Same as [`single_page_pdf`], with `font` as the `/F1` font dictionary.
pub fn single_page_pdf_with_font(lines: &[&str], font: &str) -> Vec<u8> {
    let mut content = String::from("BT\n/F1 12 Tf\n14 TL\n72 720 Td\n");
    for line in lines {
        content.push_str(&format!("({}) Tj\nT*\n", escape_pdf_string(line)));
    }
    content.push_str("ET\n");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{}endstream", content.len(), content),
        font.to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    pdf
}

fn escape_pdf_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('(', "\\(").replace(')', "\\)")
}

/// Write `bytes` to `name` inside `dir`.
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// The JSON line printed for a usage error.
pub const USAGE_LINE: &str = "{\"success\": false, \"error\": \"Please provide PDF file path\"}\n";
