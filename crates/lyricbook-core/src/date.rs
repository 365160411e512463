//! Release date normalization
//!
//! Every accepted representation is rendered as `Y/M/D` without leading
//! zeros, e.g. `2015/9/7`. Text that does not look like a date is kept as-is.

use chrono::{Datelike, Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::Cell;

/// Plausible spreadsheet serial day numbers (roughly 1954 to 2064)
const SERIAL_RANGE: std::ops::RangeInclusive<f64> = 20000.0..=60000.0;

static SERIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(?:\.\d+)?$").unwrap());
static YMD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4})\D+(\d{1,2})\D+(\d{1,2})").unwrap());

/// Render a date in canonical form
pub fn format_date<D: Datelike>(date: &D) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

/// Today's local date in canonical form
pub fn today() -> String {
    format_date(&Local::now().date_naive())
}

/// Normalize a cell value to `Y/M/D`, or return it unchanged when no date is found
pub fn normalize_date(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Date(dt) => format_date(dt),
        Cell::Number(n) => from_serial(*n).unwrap_or_else(|| cell.text()),
        Cell::Text(s) => normalize_date_text(s),
    }
}

/// Normalize free text: a spreadsheet serial, or any `YYYY?M?D` pattern
pub fn normalize_date_text(raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        return String::new();
    }

    if SERIAL_RE.is_match(text) {
        if let Some(date) = text.parse::<f64>().ok().and_then(from_serial) {
            return date;
        }
    }

    if let Some(caps) = YMD_RE.captures(text) {
        let parsed = (|| {
            let year: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        })();
        if let Some(date) = parsed {
            return format_date(&date);
        }
    }

    text.to_string()
}

/// Convert a spreadsheet serial day number; day 0 is 1899-12-30
fn from_serial(serial: f64) -> Option<String> {
    if !SERIAL_RANGE.contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = epoch.checked_add_signed(Duration::days(serial.floor() as i64))?;
    Some(format_date(&date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert_eq!(normalize_date_text("2015-09-07"), "2015/9/7");
    }

    #[test]
    fn test_serial_date() {
        assert_eq!(normalize_date_text("42254"), "2015/9/7");
        assert_eq!(normalize_date_text("42254.75"), "2015/9/7");
        assert_eq!(normalize_date(&Cell::Number(42254.0)), "2015/9/7");
    }

    #[test]
    fn test_canonical_is_unchanged() {
        assert_eq!(normalize_date_text("2015/9/7"), "2015/9/7");
    }

    #[test]
    fn test_garbage_is_kept() {
        assert_eq!(normalize_date_text("TBD"), "TBD");
        assert_eq!(normalize_date_text("2015"), "2015");
        assert_eq!(normalize_date(&Cell::Number(7.0)), "7");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(normalize_date_text("2019.01/05"), "2019/1/5");
        assert_eq!(normalize_date_text("2019年1月5日"), "2019/1/5");
        assert_eq!(normalize_date_text("released 2020 - 12 - 31"), "2020/12/31");
    }

    #[test]
    fn test_invalid_calendar_date_is_kept() {
        assert_eq!(normalize_date_text("2015-13-40"), "2015-13-40");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_date_text("   "), "");
        assert_eq!(normalize_date(&Cell::Empty), "");
    }

    #[test]
    fn test_native_date() {
        let dt = NaiveDate::from_ymd_opt(2021, 3, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(normalize_date(&Cell::Date(dt)), "2021/3/4");
    }
}
