//! Text-to-grid parsing
//!
//! Comma-delimited text follows RFC 4180 quoting: fields may be wrapped in
//! double quotes, `""` escapes a quote, and line breaks are only literal
//! inside quotes. Tab-delimited text is split raw. `\r\n`, `\r` and `\n` all
//! end a row. Rows are left ragged.

use super::decode::Delimiter;
use crate::error::Result;

/// Parse delimited text into rows of string cells.
///
/// Trailing rows made only of empty strings are dropped.
pub fn parse_table(text: &str, delimiter: Delimiter) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.as_byte())
        .quoting(delimiter == Delimiter::Comma)
        .terminator(csv::Terminator::CRLF)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    trim_trailing_blank_rows(&mut rows);
    Ok(rows)
}

fn trim_trailing_blank_rows(rows: &mut Vec<Vec<String>>) {
    while rows
        .last()
        .is_some_and(|row| row.iter().all(|cell| cell.is_empty()))
    {
        rows.pop();
    }
}
