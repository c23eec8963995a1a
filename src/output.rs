//! JSON line rendering.
//!
//! Consumers of the extractor compare output byte-for-byte, so the line keeps
//! the conventional layout of the tool it replaces: `", "` between members,
//! `": "` after keys, and every non-ASCII character (plus DEL) escaped as
//! `\uXXXX`.

use crate::error::Result;
use crate::result::ExtractionResult;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io::{self, Write};

/// `serde_json` formatter producing spaced separators and ASCII-only strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiSpacedFormatter;

impl Formatter for AsciiSpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Render `value` as one JSON line without the trailing newline.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, AsciiSpacedFormatter);
    value.serialize(&mut ser)?;
    // The formatter only ever writes ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `result` followed by a newline and flush.
pub fn write_result<W: Write>(writer: &mut W, result: &ExtractionResult) -> Result<()> {
    let line = to_json_string(result)?;
    writeln!(writer, "{}", line)?;
    writer.flush()?;
    Ok(())
}
