//! Tabular export of the catalog
//!
//! [`export_grid`] projects the catalog into rows; [`encode_grid`] turns any
//! grid into CSV or TSV bytes. [`template`] writes just the header row for
//! users to fill in.

mod encode;
mod exporter;

pub use encode::{encode_grid, ExportFormat};
pub use exporter::{export_fields, export_grid, header_row};

use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::schema::FieldId;

/// Export the catalog as encoded bytes
pub fn export(
    catalog: &Catalog,
    fields: &[FieldId],
    format: ExportFormat,
    with_bom: bool,
) -> Result<Vec<u8>> {
    let grid = export_grid(catalog, fields);
    info!(
        "Exporting {} rows x {} columns as {}",
        grid.len().saturating_sub(1),
        grid.first().map_or(0, Vec::len),
        format
    );
    encode_grid(&grid, format, with_bom)
}

/// A header-only file for the given fields
pub fn template(fields: &[FieldId], format: ExportFormat, with_bom: bool) -> Result<Vec<u8>> {
    let header = header_row(&export_fields(fields));
    encode_grid(&[header], format, with_bom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::import;

    #[test]
    fn test_template_is_importable() {
        let bytes = template(&[FieldId::SourceLyric, FieldId::TranslationLyric], ExportFormat::Csv, true)
            .unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with(FieldId::AlbumTitle.label()));

        let mut catalog = Catalog::new();
        let report = import(&mut catalog, &bytes, "template.csv").unwrap();
        assert_eq!(report.rows_skipped, 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_template_all_fields_tsv() {
        let bytes = template(&FieldId::ALL, ExportFormat::Tsv, false).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.trim_end().split('\t').count(), FieldId::ALL.len());
    }
}
