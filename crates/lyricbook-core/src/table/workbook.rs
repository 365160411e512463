//! Workbook reading for `.xlsx`, `.xls` and `.ods` files
//!
//! Workbook date cells arrive as native dates; other cells keep their type.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use super::{Cell, Grid, SpreadsheetReader};
use crate::error::{Error, Result};

/// Reads the first worksheet of a workbook with calamine
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkbookReader;

impl SpreadsheetReader for WorkbookReader {
    fn read(&self, bytes: &[u8]) -> Result<Grid> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| Error::Spreadsheet(e.to_string()))?;

        let Some(range) = workbook.worksheet_range_at(0) else {
            return Ok(Grid::new());
        };
        let range = range.map_err(|e| Error::Spreadsheet(e.to_string()))?;

        Ok(range
            .rows()
            .map(|row| row.iter().map(to_cell).collect())
            .collect())
    }
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::String(s) | Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        // Values chrono cannot represent stay serial numbers
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(Cell::Date)
            .unwrap_or_else(|| Cell::Number(dt.as_f64())),
        _ => Cell::Empty,
    }
}
