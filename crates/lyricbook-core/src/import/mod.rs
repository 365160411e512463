//! Tabular import into the catalog
//!
//! File bytes are decoded into a grid, the header row is resolved against the
//! field aliases, and the remaining rows are reconciled into the catalog. The
//! only fatal condition is a header without album and song title columns,
//! which is reported before anything is mutated.

mod preview;
mod reconcile;
mod report;

pub use preview::{ImportPreview, SongChange};
pub use reconcile::Reconciler;
pub use report::ImportReport;

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::schema::{resolve_headers, ColumnMap};
use crate::table::{read_grid, Cell, Grid, SpreadsheetReader};

/// Entry point for imports, optionally able to read packaged spreadsheets
#[derive(Default)]
pub struct Importer {
    spreadsheet_reader: Option<Box<dyn SpreadsheetReader>>,
}

impl Importer {
    /// Create an importer for delimited text files, and workbooks when the
    /// `xlsx` feature is enabled
    pub fn new() -> Self {
        #[cfg(feature = "xlsx")]
        {
            Self::default().with_spreadsheet_reader(crate::table::WorkbookReader)
        }
        #[cfg(not(feature = "xlsx"))]
        {
            Self::default()
        }
    }

    /// Use `reader` for `.xlsx` and other packaged spreadsheet files instead of the built-in one
    pub fn with_spreadsheet_reader(mut self, reader: impl SpreadsheetReader + 'static) -> Self {
        self.spreadsheet_reader = Some(Box::new(reader));
        self
    }

    /// Decode and parse a file into a grid without touching any catalog
    pub fn read(&self, bytes: &[u8], filename: &str) -> Result<Grid> {
        read_grid(bytes, filename, self.spreadsheet_reader.as_deref())
    }

    /// Import a file into `catalog`
    pub fn import(&self, catalog: &mut Catalog, bytes: &[u8], filename: &str) -> Result<ImportReport> {
        let grid = self.read(bytes, filename)?;
        let report = self.import_grid(catalog, &grid)?;
        info!("Imported {}: {}", filename, report);
        Ok(report)
    }

    /// Import an already decoded grid whose first row is the header
    pub fn import_grid(&self, catalog: &mut Catalog, grid: &[Vec<Cell>]) -> Result<ImportReport> {
        let (header, rows) = grid.split_first().ok_or(Error::EmptyFile)?;
        let reconciler = Reconciler::new(resolve_header_row(header))?;
        Ok(reconciler.reconcile(catalog, rows))
    }

    /// Run an import against a copy of `catalog` and describe what would change
    pub fn preview(&self, catalog: &Catalog, bytes: &[u8], filename: &str) -> Result<ImportPreview> {
        let grid = self.read(bytes, filename)?;
        let mut scratch = catalog.clone();
        let report = self.import_grid(&mut scratch, &grid)?;
        Ok(ImportPreview::compare(catalog, &scratch, report))
    }
}

/// Resolve a header row, logging headers that matched no field
fn resolve_header_row(header: &[Cell]) -> ColumnMap {
    let labels: Vec<String> = header.iter().map(Cell::text).collect();
    let columns = resolve_headers(&labels);

    for (index, label) in labels.iter().enumerate() {
        let used = columns.fields().iter().any(|f| columns.get(*f) == Some(index));
        if !used && !label.is_empty() {
            warn!("Ignoring unrecognized column '{}'", label);
        }
    }
    if !columns.missing_required().is_empty() {
        warn!("Header row lacks required columns: {:?}", labels);
    }

    columns
}

/// Import `bytes` into `catalog` with a default [`Importer`]
pub fn import(catalog: &mut Catalog, bytes: &[u8], filename: &str) -> Result<ImportReport> {
    Importer::new().import(catalog, bytes, filename)
}
