//! Byte decoding and delimiter detection for text tables

use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use serde::{Deserialize, Serialize};

/// Column separator of a text table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Delimiter {
    /// Comma-separated with RFC 4180 quoting
    #[default]
    Comma,
    /// Tab-separated, split raw without quote handling
    Tab,
}

impl Delimiter {
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

/// Decoded text plus what was learned while decoding it
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub delimiter: Delimiter,
    /// Name of the encoding that was applied, e.g. `UTF-16LE`
    pub encoding: &'static str,
}

/// How a file's bytes should be turned into a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Delimited text (CSV, TSV, TXT)
    Text,
    /// Packaged spreadsheet that needs an external reader
    Spreadsheet,
}

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Classify a file by its declared name
pub fn source_kind(filename: &str) -> SourceKind {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension {
        Some(ext) if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) => SourceKind::Spreadsheet,
        _ => SourceKind::Text,
    }
}

/// Decode raw bytes into text.
///
/// A UTF-16 BOM selects UTF-16 of that byte order; anything else is read as
/// UTF-8 with an optional BOM dropped. Malformed sequences become U+FFFD, so
/// this never fails.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    if had_errors {
        tracing::warn!("Input is not valid {}; malformed bytes were replaced", encoding.name());
    }

    let text = text.into_owned();
    let delimiter = detect_delimiter(&text);

    DecodedText {
        text,
        delimiter,
        encoding: encoding.name(),
    }
}

/// A first line with tabs and no commas marks a tab-separated document
pub fn detect_delimiter(text: &str) -> Delimiter {
    let first_line = text.split(|c: char| c == '\r' || c == '\n').next().unwrap_or("");
    if !first_line.contains(',') && first_line.contains('\t') {
        Delimiter::Tab
    } else {
        Delimiter::Comma
    }
}
