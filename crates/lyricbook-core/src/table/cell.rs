//! Cell values produced by text parsing or an external spreadsheet reader

use chrono::NaiveDateTime;

/// A single table cell.
///
/// Text files only ever produce [`Cell::Text`]; packaged spreadsheets may
/// also carry native numbers and dates.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
}

/// A ragged grid of cells, row-major
pub type Grid = Vec<Vec<Cell>>;

impl Cell {
    /// Textual value of the cell, trimmed of surrounding whitespace
    pub fn text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => format_number(*n),
            Cell::Date(dt) => dt.format("%Y/%-m/%-d").to_string(),
        }
    }

    /// Whether the cell carries no usable value
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(n) => n.is_nan(),
            Cell::Date(_) => false,
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// Whole numbers print without a fractional part, so `1989.0` reads as `1989`
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Cell at `index` in `row`, treating a missing column or unresolved field as empty
pub fn cell_at(row: &[Cell], index: Option<usize>) -> &Cell {
    const EMPTY: &Cell = &Cell::Empty;
    index.and_then(|i| row.get(i)).unwrap_or(EMPTY)
}

/// Convert a grid of plain strings into a grid of text cells
pub fn text_grid(rows: Vec<Vec<String>>) -> Grid {
    rows.into_iter()
        .map(|row| row.into_iter().map(Cell::Text).collect())
        .collect()
}
