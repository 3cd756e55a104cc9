//! Receipt OCR text parser.
//!
//! Expected input is whatever the OCR engine made of a photographed retail
//! receipt, e.g.:
//!
//!   KORZINKA CHILANZAR
//!   CHEK N 004512
//!   Non            4.000
//!   Sut           12.500
//!   JAMI: 150.000
//!   12.05.2026 18:42
//!
//! Every field degrades independently; this function never fails. The
//! merchant heuristic (first qualifying line of the first five) and the
//! largest-decimal-number amount fallback are tuned to local retail receipts
//! and are accepted to misfire on receipts structured differently.

use hisob_core::{
    find_date, guess_category, parse_locale_amount, CandidateTransaction, Currency,
};
use regex::Regex;

/// Lines containing these words are receipt boilerplate, never a store name.
const BOILERPLATE_WORDS: &[&str] = &[
    "chek", "check", "kvitantsiya", "receipt", "inn", "qqs", "stir",
];

/// Parse one OCR text blob into a single candidate transaction.
pub fn parse_receipt_text(ocr_text: &str) -> CandidateTransaction {
    let mut txn = CandidateTransaction::from_raw(ocr_text);
    let lines: Vec<&str> = ocr_text.trim().lines().collect();

    txn.amount = total_line_amount(&lines).or_else(|| largest_decimal(&lines));
    txn.date = lines.iter().find_map(|line| find_date(line));
    txn.merchant = merchant_line(&lines);
    if let Some(merchant) = &txn.merchant {
        txn.category = guess_category(merchant);
    }
    if ocr_text.to_uppercase().contains("USD") || ocr_text.contains('$') {
        txn.currency = Currency::Usd;
    }
    txn
}

/// Bottom-up scan for a total keyword followed by a number. Receipts print
/// the grand total near the end, so the first hit from the bottom wins.
fn total_line_amount(lines: &[&str]) -> Option<f64> {
    let re = Regex::new(
        r"(?i)(?:JAMI|ИТОГО|ИТОГ|TOTAL|ЖАМИ|HAMMASI|ВСЕГО)\s*[:=]?\s*([\d\s.,]+)",
    )
    .ok()?;
    lines
        .iter()
        .rev()
        .find_map(|line| parse_locale_amount(&re.captures(line)?[1]))
}

/// Fallback when no total keyword survived OCR: line items are priced
/// `digits[.,]dd`, and item prices never exceed the grand total, so the
/// largest such number on the receipt is the best guess.
fn largest_decimal(lines: &[&str]) -> Option<f64> {
    let re = Regex::new(r"[\d\s]{1,15}[.,]\d{2}").ok()?;
    lines
        .iter()
        .flat_map(|line| re.find_iter(line))
        .filter_map(|m| m.as_str().replace(' ', "").replace(',', ".").parse::<f64>().ok())
        .reduce(f64::max)
}

/// First of the first five lines that looks like a store name rather than
/// boilerplate or a bare number.
fn merchant_line(lines: &[&str]) -> Option<String> {
    let numeric_re = Regex::new(r"^[\d\s.,:\-/]+$").ok()?;
    for line in lines.iter().take(5) {
        let cleaned = line.trim();
        if cleaned.chars().count() <= 2 {
            continue;
        }
        if numeric_re.is_match(cleaned) {
            continue;
        }
        let lower = cleaned.to_lowercase();
        if BOILERPLATE_WORDS.iter().any(|w| lower.contains(w)) {
            continue;
        }
        return Some(cleaned.to_string());
    }
    None
}
