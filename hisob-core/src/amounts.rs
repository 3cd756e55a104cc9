//! Amount token normalization.
//!
//! Local receipts group thousands with `.` (or a space), so `150.000` is one
//! hundred fifty thousand, not 150.0. A dot is only a decimal point when it
//! is not followed by exactly three digits.

use regex::Regex;

/// Parse an amount token in local notation.
///
/// Spaces are stripped and `,` normalized to `.`; a `digits.ddd` shape then
/// drops its dot (thousands group), and a string still holding more than one
/// dot collapses to a plain integer. `None` when no number survives.
pub fn parse_locale_amount(raw: &str) -> Option<f64> {
    let mut s = raw.replace(' ', "").replace(',', ".");

    let thousands = Regex::new(r"^\d+\.\d{3}$").ok()?;
    if thousands.is_match(&s) {
        s = s.replace('.', "");
    }
    if s.split('.').count() > 2 {
        s = s.replace('.', "");
    }

    s.parse().ok()
}

/// Parse a US-grouped figure ("3,500,000.00") by dropping commas and spaces.
pub fn parse_plain_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").replace(' ', "").trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_as_thousands_separator() {
        assert_eq!(parse_locale_amount("150.000"), Some(150000.0));
        assert_eq!(parse_locale_amount("1.500.000"), Some(1500000.0));
    }

    #[test]
    fn test_comma_as_decimal_point() {
        assert_eq!(parse_locale_amount("150,50"), Some(150.50));
        assert_eq!(parse_locale_amount("12 500,75"), Some(12500.75));
    }

    #[test]
    fn test_mixed_separators_collapse_to_integer() {
        // "1,500.00" normalizes to three dot-groups, so every dot drops.
        assert_eq!(parse_locale_amount("1,500.00"), Some(150000.0));
    }

    #[test]
    fn test_plain_decimal_passes_through() {
        assert_eq!(parse_locale_amount("45.20"), Some(45.20));
        assert_eq!(parse_locale_amount("7000"), Some(7000.0));
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(parse_locale_amount("ИТОГО"), None);
        assert_eq!(parse_locale_amount(""), None);
    }

    #[test]
    fn test_plain_amount() {
        assert_eq!(parse_plain_amount("3,500,000.00"), Some(3500000.0));
        assert_eq!(parse_plain_amount("-45,000"), Some(-45000.0));
        assert_eq!(parse_plain_amount(""), None);
        assert_eq!(parse_plain_amount("n/a"), None);
    }
}
