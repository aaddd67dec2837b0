//! JSON text encoding for response bodies.
//!
//! Function URL bodies are JSON text embedded in a string field, and clients
//! compare them byte for byte. The layout differs from compact `serde_json`
//! output in two ways:
//!
//! - members and items are separated by `", "` and keys by `": "`
//! - the text is ASCII-only; anything outside `' '..='~'` is written as a
//!   `\uXXXX` escape (UTF-16 surrogate pairs above the BMP)
//!
//! # Example
//! ```
//! use function_url_sdk::body;
//! use serde_json::json;
//!
//! let text = body::to_string(&json!({"message": "café"})).unwrap();
//! assert_eq!(text, r#"{"message": "caf\u00e9"}"#);
//! ```

use std::io;

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::error::HandlerError;

/// `serde_json` formatter producing spaced separators and ASCII-only strings
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    // Quotes, backslashes and control characters never reach this method;
    // serde_json escapes them through `write_char_escape`.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut run_start = 0;
        for (idx, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[run_start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            run_start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[run_start..].as_bytes())
    }
}

/// Serialize a value into body text.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, HandlerError> {
    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| HandlerError::Serialization(serde_json::Error::custom(e)))
}
