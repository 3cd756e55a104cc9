//! Bank CSV export parser.
//!
//! Exports arrive as raw bytes of unknown encoding, delimiter, and column
//! order. Decoding tries UTF-8, then WINDOWS-1251 (common for Cyrillic bank
//! exports) — nothing else. Headers are matched against a multilingual
//! synonym table (en/ru/uz); a statement with neither an amount column nor a
//! credit/debit pair yields no rows. Individual malformed rows are skipped,
//! never raised.

use anyhow::{bail, Result};
use hisob_core::{
    guess_category, parse_date_cell, parse_plain_amount, CandidateTransaction, Currency, TxnKind,
};

const DATE_HEADERS: &[&str] = &["date", "дата", "sana", "transaction date", "дата операции"];
const AMOUNT_HEADERS: &[&str] = &["amount", "сумма", "summa", "miqdor", "sum", "сумма операции"];
const DESCRIPTION_HEADERS: &[&str] = &[
    "description", "описание", "tavsif", "details", "merchant", "назначение", "наименование",
];
const CREDIT_HEADERS: &[&str] = &["credit", "кредит", "kirim", "приход"];
const DEBIT_HEADERS: &[&str] = &["debit", "дебет", "chiqim", "расход"];
const CURRENCY_HEADERS: &[&str] = &["currency", "валюта", "valyuta"];

/// Column indices resolved from the header row. Unmatched headers are
/// ignored; a later duplicate header wins over an earlier one.
#[derive(Debug, Default)]
struct ColumnMap {
    date: Option<usize>,
    amount: Option<usize>,
    description: Option<usize>,
    credit: Option<usize>,
    debit: Option<usize>,
    currency: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &csv::StringRecord) -> Self {
        let mut map = ColumnMap::default();
        for (i, cell) in header.iter().enumerate() {
            let name = cell.trim().to_lowercase();
            if DATE_HEADERS.contains(&name.as_str()) {
                map.date = Some(i);
            } else if AMOUNT_HEADERS.contains(&name.as_str()) {
                map.amount = Some(i);
            } else if DESCRIPTION_HEADERS.contains(&name.as_str()) {
                map.description = Some(i);
            } else if CREDIT_HEADERS.contains(&name.as_str()) {
                map.credit = Some(i);
            } else if DEBIT_HEADERS.contains(&name.as_str()) {
                map.debit = Some(i);
            } else if CURRENCY_HEADERS.contains(&name.as_str()) {
                map.currency = Some(i);
            }
        }
        map
    }
}

/// Decode and parse a bank CSV export. A byte stream neither UTF-8 nor
/// WINDOWS-1251 can decode is the only hard error.
pub fn parse_csv_export(bytes: &[u8]) -> Result<Vec<CandidateTransaction>> {
    match std::str::from_utf8(bytes) {
        Ok(text) => parse_csv_text(text),
        Err(_) => {
            let (text, _, had_errors) = encoding_rs::WINDOWS_1251.decode(bytes);
            if had_errors {
                bail!("statement is neither valid UTF-8 nor WINDOWS-1251");
            }
            parse_csv_text(&text)
        }
    }
}

/// Parse an already-decoded CSV export. The delimiter is read off the header
/// line: semicolon when present, comma otherwise.
pub fn parse_csv_text(text: &str) -> Result<Vec<CandidateTransaction>> {
    let first_line = text.lines().next().unwrap_or("");
    let delimiter = if first_line.contains(';') { b';' } else { b',' };

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in rdr.records() {
        rows.push(result?);
    }
    if rows.len() < 2 {
        return Ok(Vec::new());
    }

    let columns = ColumnMap::from_header(&rows[0]);
    let mut out = Vec::new();
    for row in &rows[1..] {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if let Some(txn) = extract_row(row, &columns, delimiter as char) {
            out.push(txn);
        }
    }
    Ok(out)
}

/// One row to one candidate; `None` for rows with no usable positive amount.
fn extract_row(
    row: &csv::StringRecord,
    columns: &ColumnMap,
    delimiter: char,
) -> Option<CandidateTransaction> {
    let raw = row.iter().collect::<Vec<_>>().join(&delimiter.to_string());
    let mut txn = CandidateTransaction::from_raw(raw);

    if let Some(i) = columns.amount {
        // Signed single column: sign is the direction, magnitude the amount.
        let signed = parse_plain_amount(row.get(i).unwrap_or(""))?;
        txn.kind = if signed > 0.0 { TxnKind::Income } else { TxnKind::Expense };
        txn.amount = Some(signed.abs());
    } else if let (Some(ci), Some(di)) = (columns.credit, columns.debit) {
        let credit = amount_or_zero(row.get(ci).unwrap_or(""))?;
        let debit = amount_or_zero(row.get(di).unwrap_or(""))?;
        if credit > 0.0 {
            txn.kind = TxnKind::Income;
            txn.amount = Some(credit);
        } else if debit > 0.0 {
            txn.kind = TxnKind::Expense;
            txn.amount = Some(debit);
        } else {
            return None;
        }
    } else {
        return None;
    }

    // Zero survives the sign split above but is not a usable amount.
    if txn.amount.is_none_or(|a| a <= 0.0) {
        return None;
    }

    if let Some(i) = columns.date {
        txn.date = parse_date_cell(row.get(i).unwrap_or(""));
    }
    if let Some(i) = columns.description {
        let desc = row.get(i).unwrap_or("").trim();
        if !desc.is_empty() {
            txn.merchant = Some(desc.to_string());
            txn.category = guess_category(desc);
        }
    }
    if let Some(i) = columns.currency {
        if let Some(currency) = Currency::from_code(row.get(i).unwrap_or("")) {
            txn.currency = currency;
        }
    }

    Some(txn)
}

/// Credit/debit cells: empty means zero, a non-empty unparseable cell kills
/// the row.
fn amount_or_zero(cell: &str) -> Option<f64> {
    let cleaned = cell.replace(',', "").replace(' ', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse().ok()
}
