//! Integration tests for the extractor against real files.

mod common;

use common::{
    single_page_pdf, single_page_pdf_with_font, write_fixture, MISMATCHED_WIDTHS_FONT,
    UNKNOWN_FONT_NO_WIDTHS,
};
use pdf_text_extract::normalize::normalize_whitespace;
use pdf_text_extract::parser::{ContentParser, PdfExtractParser};
use pdf_text_extract::{Backend, Error, ExtractionResult, Extractor, ExtractorConfig};
use proptest::prelude::*;
use tempfile::tempdir;

mod pdf_extract_backend {
    use super::*;

    #[test]
    fn test_extracts_text_from_generated_pdf() {
        let dir = tempdir().unwrap();
        let path = write_fixture(
            dir.path(),
            "letter.pdf",
            &single_page_pdf(&["Dear Customer", "Your order has shipped"]),
        );

        let result = Extractor::default().extract(&path);
        let text = result.text().expect("extraction should succeed");
        assert!(text.contains("Dear"), "{}", text);
        assert!(text.contains("shipped"), "{}", text);
        assert!(!text.contains("  "));
        assert!(!text.contains('\n'));
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_same_file_twice_gives_same_text() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "memo.pdf", &single_page_pdf(&["Quarterly numbers"]));

        let extractor = Extractor::default();
        assert_eq!(extractor.extract(&path), extractor.extract(&path));
    }

    #[test]
    fn test_page_without_text_reports_no_content() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "blank.pdf", &single_page_pdf(&[]));

        assert_eq!(
            Extractor::default().extract(&path),
            ExtractionResult::failure("No text content found")
        );
    }

    #[test]
    fn test_corrupt_pdf_is_a_failure_result() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "corrupt.pdf", b"%PDF-1.4\n1 0 obj\n<< /Type");

        let result = Extractor::default().extract(&path);
        assert!(!result.is_success());
        assert!(!result.error().unwrap().is_empty());
    }

    #[test]
    fn test_font_without_widths_still_extracts() {
        let dir = tempdir().unwrap();
        let path = write_fixture(
            dir.path(),
            "custom-font.pdf",
            &single_page_pdf_with_font(&["Hello world"], UNKNOWN_FONT_NO_WIDTHS),
        );

        assert_eq!(
            Extractor::default().extract(&path),
            ExtractionResult::success("Hello world")
        );
    }

    #[test]
    fn test_parser_panic_is_a_failure_result() {
        let dir = tempdir().unwrap();
        let path = write_fixture(
            dir.path(),
            "bad-widths.pdf",
            &single_page_pdf_with_font(&["Hello"], MISMATCHED_WIDTHS_FONT),
        );

        let extractor = Extractor::default();
        let result = extractor.extract(&path);
        let error = result.error().expect("extraction should fail");
        assert!(error.starts_with("PDF parser panicked:"), "{}", error);
        assert!(matches!(extractor.try_extract(&path), Err(Error::BackendPanic(_))));
    }

    #[test]
    fn test_raw_parser_keeps_layout_whitespace() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "two.pdf", &single_page_pdf(&["first", "second"]));

        let parsed = PdfExtractParser::new().parse(&path).unwrap();
        let raw = parsed.content.unwrap();
        assert!(raw.contains("first"));
        assert_eq!(normalize_whitespace(&raw), Extractor::default().extract(&path).text().unwrap());
    }
}

mod passthrough {
    use super::*;

    #[test]
    fn test_text_file_is_read_directly() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "notes.txt", b"alpha\r\n\r\nbeta\tgamma\n");
        assert_eq!(
            Extractor::default().extract(&path),
            ExtractionResult::success("alpha beta gamma")
        );
    }

    #[test]
    fn test_pdf_with_txt_extension_goes_to_pdf_backend() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "renamed.txt", &single_page_pdf(&["Renamed file"]));
        let text = Extractor::default().extract(&path).text().unwrap().to_string();
        assert!(text.contains("Renamed"));
        assert!(!text.contains("%PDF"));
    }

    #[test]
    fn test_passthrough_disabled_sends_text_to_pdf_backend() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "notes.txt", b"plain words");
        let config = ExtractorConfig::new().with_plain_text_passthrough(false);
        assert!(!Extractor::new(&config).extract(&path).is_success());
    }

    #[test]
    fn test_empty_text_file() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "empty.txt", b"");
        assert_eq!(
            Extractor::default().extract(&path).error(),
            Some("No text content found")
        );
    }
}

mod pdftotext_backend {
    use super::*;

    #[test]
    fn test_unavailable_program_is_a_failure_result() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "doc.pdf", &single_page_pdf(&["x"]));
        let config = ExtractorConfig::new()
            .with_backend(Backend::Pdftotext)
            .with_pdftotext_program(dir.path().join("missing-pdftotext"));

        let result = Extractor::new(&config).extract(&path);
        assert!(result.error().unwrap().starts_with("Failed to run"));
    }

    #[cfg(unix)]
    #[test]
    fn test_output_is_normalized() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let program = dir.path().join("pdftotext");
        std::fs::write(&program, "#!/bin/sh\nprintf 'Title\\n\\n  Body text\\n\\f'\n").unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();
        let path = write_fixture(dir.path(), "doc.pdf", &single_page_pdf(&["ignored"]));

        let config = ExtractorConfig::new()
            .with_backend(Backend::Pdftotext)
            .with_pdftotext_program(&program);
        assert_eq!(
            Extractor::new(&config).extract(&path),
            ExtractionResult::success("Title Body text")
        );
    }
}

proptest! {
    #[test]
    fn prop_normalized_text_has_no_whitespace_runs(s in "\\PC*") {
        let out = normalize_whitespace(&s);
        prop_assert!(!out.starts_with(char::is_whitespace));
        prop_assert!(!out.ends_with(char::is_whitespace));
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.chars().any(|c| c.is_whitespace() && c != ' '));
    }

    #[test]
    fn prop_normalize_is_idempotent(s in "[ \\t\\r\\nA-Za-z0-9\u{a0}\u{2028}\u{1c}-\u{1f}]{0,64}") {
        let once = normalize_whitespace(&s);
        prop_assert_eq!(normalize_whitespace(&once), once);
    }

    #[test]
    fn prop_words_are_preserved(words in prop::collection::vec("[a-z]{1,8}", 0..12), sep in "[ \\t\\n]{1,4}") {
        let input = words.join(sep.as_str());
        prop_assert_eq!(normalize_whitespace(&input), words.join(" "));
    }
}
