//! Grid to bytes encoding for CSV and TSV

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::table::Delimiter;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Tsv => write!(f, "TSV"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" | "tab" => Ok(ExportFormat::Tsv),
            other => Err(format!("Invalid format '{}'. Use: csv or tsv", other)),
        }
    }
}

impl ExportFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    pub fn delimiter(&self) -> Delimiter {
        match self {
            ExportFormat::Csv => Delimiter::Comma,
            ExportFormat::Tsv => Delimiter::Tab,
        }
    }
}

/// Encode a grid as delimited UTF-8 text.
///
/// CSV fields are quoted when needed. TSV fields are written raw, matching the
/// raw tab split on import, so tabs and line breaks inside a TSV field become
/// spaces. With `with_bom`, a UTF-8 byte-order mark is written first so
/// spreadsheet applications pick the right encoding.
pub fn encode_grid(grid: &[Vec<String>], format: ExportFormat, with_bom: bool) -> Result<Vec<u8>> {
    let quote_style = match format {
        ExportFormat::Csv => csv::QuoteStyle::Necessary,
        ExportFormat::Tsv => csv::QuoteStyle::Never,
    };
    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter().as_byte())
        .quote_style(quote_style)
        .flexible(true)
        .from_writer(Vec::new());

    for row in grid {
        match format {
            ExportFormat::Csv => writer.write_record(row)?,
            ExportFormat::Tsv => {
                writer.write_record(row.iter().map(|cell| flatten_tsv_field(cell)))?
            }
        }
    }

    let body = writer
        .into_inner()
        .map_err(|e| Error::Other(format!("CSV flush error: {}", e)))?;

    if !with_bom {
        return Ok(body);
    }
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

fn flatten_tsv_field(cell: &str) -> String {
    cell.replace("\r\n", " ")
        .replace(|c: char| matches!(c, '\t' | '\r' | '\n'), " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Tsv.extension(), "tsv");
    }

    #[test]
    fn test_export_format_display_and_parse() {
        assert_eq!(format!("{}", ExportFormat::Tsv), "TSV");
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("tab".parse::<ExportFormat>(), Ok(ExportFormat::Tsv));
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_csv_quotes_when_needed() {
        let bytes = encode_grid(
            &grid(&[&["a", "b,c"], &["line1\nline2", "say \"hi\""]]),
            ExportFormat::Csv,
            false,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "a,\"b,c\"\n\"line1\nline2\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_tsv_writes_quotes_raw() {
        let bytes = encode_grid(
            &grid(&[&["he said \"hi\"", "a\tb"], &["line1\nline2", "x"]]),
            ExportFormat::Tsv,
            false,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "he said \"hi\"\ta b\nline1 line2\tx\n"
        );
    }

    #[test]
    fn test_tsv_with_bom() {
        let bytes = encode_grid(&grid(&[&["a", "b"]]), ExportFormat::Tsv, true).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);
        assert_eq!(&bytes[3..], b"a\tb\n");
    }
}
