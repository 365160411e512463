//! Turning file bytes into a grid of cells
//!
//! Delimited text goes through [`decode_text`] and [`parse_table`]. Packaged
//! spreadsheets are handed to a [`SpreadsheetReader`], which decodes and parses
//! in one step and may produce native numbers and dates.

mod cell;
pub mod decode;
pub mod parse;
#[cfg(feature = "xlsx")]
mod workbook;

pub use cell::{cell_at, text_grid, Cell, Grid};
pub use decode::{decode_text, detect_delimiter, source_kind, DecodedText, Delimiter, SourceKind};
pub use parse::parse_table;
#[cfg(feature = "xlsx")]
pub use workbook::WorkbookReader;

use crate::error::{Error, Result};

/// External reader for packaged spreadsheet formats such as `.xlsx`
pub trait SpreadsheetReader {
    /// Read the first worksheet of `bytes` into a grid
    fn read(&self, bytes: &[u8]) -> Result<Grid>;
}

/// Read `bytes` into a grid, picking the path from the file name.
///
/// Spreadsheet files need a `reader`; without one they are rejected as
/// unsupported.
pub fn read_grid(
    bytes: &[u8],
    filename: &str,
    reader: Option<&dyn SpreadsheetReader>,
) -> Result<Grid> {
    match source_kind(filename) {
        SourceKind::Spreadsheet => match reader {
            Some(reader) => reader.read(bytes),
            None => Err(Error::UnsupportedFormat(format!(
                "{} (no spreadsheet reader configured)",
                filename
            ))),
        },
        SourceKind::Text => {
            let decoded = decode_text(bytes);
            tracing::debug!(
                encoding = decoded.encoding,
                delimiter = ?decoded.delimiter,
                "Decoded {}",
                filename
            );
            let rows = parse_table(&decoded.text, decoded.delimiter)?;
            Ok(text_grid(rows))
        }
    }
}
