//! Date extraction helpers.
//!
//! Each caller has a fixed precedence list; the first pattern that both
//! matches and forms a real calendar date wins. Slashes are normalized to
//! dots before parsing so `12/02/2026` and `12.02.2026` are the same date.

use chrono::NaiveDate;
use regex::Regex;

/// Receipt-line precedence: dd.mm.yyyy, dd.mm.yy, then ISO yyyy-mm-dd.
const LINE_PATTERNS: &[(&str, &str)] = &[
    (r"\d{2}[./]\d{2}[./]\d{4}", "%d.%m.%Y"),
    (r"\d{2}[./]\d{2}[./]\d{2}\b", "%d.%m.%y"),
    (r"\d{4}-\d{2}-\d{2}", "%Y-%m-%d"),
];

/// Whole-cell formats seen in bank CSV exports, tried in order.
const CELL_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y"];

/// Scan one line of receipt text for a date.
///
/// A pattern that matches but does not form a valid date (e.g. `31.02.2026`)
/// falls through to the next pattern.
pub fn find_date(line: &str) -> Option<NaiveDate> {
    for (pattern, fmt) in LINE_PATTERNS {
        let re = Regex::new(pattern).ok()?;
        if let Some(m) = re.find(line) {
            let normalized = m.as_str().replace('/', ".");
            if let Ok(date) = NaiveDate::parse_from_str(&normalized, fmt) {
                return Some(date);
            }
        }
    }
    None
}

/// The single dd.mm.yyyy (or slashed) pattern SMS alerts carry.
pub fn find_date_dmy(text: &str) -> Option<NaiveDate> {
    let re = Regex::new(r"\d{2}[./]\d{2}[./]\d{4}").ok()?;
    let m = re.find(text)?;
    NaiveDate::parse_from_str(&m.as_str().replace('/', "."), "%d.%m.%Y").ok()
}

/// Parse a whole CSV cell as a date. Day-first formats are tried before the
/// US month-first one.
pub fn parse_date_cell(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    CELL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_find_date_formats() {
        assert_eq!(find_date("Sana: 12.05.2026 18:42"), Some(d(2026, 5, 12)));
        assert_eq!(find_date("12/05/2026"), Some(d(2026, 5, 12)));
        assert_eq!(find_date("31.12.24"), Some(d(2024, 12, 31)));
        assert_eq!(find_date("issued 2026-02-12"), Some(d(2026, 2, 12)));
        assert_eq!(find_date("no date here"), None);
    }

    #[test]
    fn test_invalid_calendar_date_is_skipped() {
        assert_eq!(find_date("31.02.2026"), None);
    }

    #[test]
    fn test_find_date_dmy() {
        assert_eq!(find_date_dmy("Korzinka. 12.02.2026 14:30"), Some(d(2026, 2, 12)));
        assert_eq!(find_date_dmy("Macro. 12/02/2026."), Some(d(2026, 2, 12)));
        assert_eq!(find_date_dmy("Balans: 3,500,000.00"), None);
    }

    #[test]
    fn test_parse_date_cell_precedence() {
        assert_eq!(parse_date_cell("2026-02-12"), Some(d(2026, 2, 12)));
        assert_eq!(parse_date_cell("12.02.2026"), Some(d(2026, 2, 12)));
        // Day-first wins over month-first when both would fit.
        assert_eq!(parse_date_cell("12/02/2026"), Some(d(2026, 2, 12)));
        // Month-first is the only reading when the day field exceeds 12.
        assert_eq!(parse_date_cell("02/25/2026"), Some(d(2026, 2, 25)));
        assert_eq!(parse_date_cell(" 12-02-2026 "), Some(d(2026, 2, 12)));
        assert_eq!(parse_date_cell("not a date"), None);
    }
}
