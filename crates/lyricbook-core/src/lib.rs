//! # lyricbook-core
//!
//! Core library for a lyric study catalog: albums of songs, each with aligned
//! lyric lines, vocabulary and grammar notes.
//!
//! This crate provides the tabular import/export engine:
//! - Decoding CSV/TSV bytes (UTF-8 with or without BOM, UTF-16LE/BE) and,
//!   with the default `xlsx` feature, workbooks
//! - Resolving free-form, bilingual header rows to canonical fields
//! - Reconciling imported rows into an existing catalog without duplicates
//! - Normalizing release dates to `Y/M/D`
//! - Exporting a chosen set of fields as one flattened table
//!
//! ## Modules
//!
//! - [`catalog`] - Album, song and study-note data structures
//! - [`config`] - Export defaults and file locations
//! - [`date`] - Release date normalization
//! - [`error`] - Error types and Result alias
//! - [`export`] - Catalog to table projection and CSV/TSV encoding
//! - [`import`] - Table to catalog reconciliation
//! - [`lyrics`] - Line alignment of lyrics and translations
//! - [`schema`] - Canonical field ids and header resolution
//! - [`table`] - Byte decoding and table parsing
//!
//! ## Example
//!
//! ```
//! use lyricbook_core::{export, import, Catalog, ExportFormat, FieldId};
//!
//! let mut catalog = Catalog::new();
//! let csv = "album,song,kor,zh\nThe Day,Freely,안녕,hi\n";
//! let report = import(&mut catalog, csv.as_bytes(), "lyrics.csv").expect("import failed");
//! assert_eq!(report.lines_imported, 1);
//!
//! let bytes = export(&catalog, &FieldId::ALL, ExportFormat::Csv, false).expect("export failed");
//! assert!(!bytes.is_empty());
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod date;
pub mod error;
pub mod export;
pub mod import;
pub mod lyrics;
pub mod schema;
pub mod table;

// Re-export key types for convenience

// Error types
pub use error::{Error, Result};

// Catalog
pub use catalog::{Album, Catalog, GrammarPoint, LyricLine, Song, VocabItem};

// Configuration
pub use config::Config;

// Schema
pub use schema::{parse_field_list, resolve_headers, ColumnMap, FieldId};

// Import
pub use import::{import, ImportPreview, ImportReport, Importer, Reconciler, SongChange};

// Export
pub use export::{encode_grid, export, export_grid, template, ExportFormat};

// Tables
pub use table::{Cell, Grid, SpreadsheetReader};
#[cfg(feature = "xlsx")]
pub use table::WorkbookReader;

// Text helpers
pub use date::{normalize_date, normalize_date_text};
pub use lyrics::{align, LinePair};
