//! UzCard SMS alert parser.
//!
//! Expected shape:
//!
//!   Karta *1234: -150,000.00 UZS. Korzinka. 12.02.2026 14:30. Balans: 3,500,000.00 UZS
//!
//! The amount always carries two decimals and a currency suffix. The record
//! is income when a `+` precedes the matched amount or a deposit keyword
//! appears anywhere in the text; the sign itself is consumed by the amount
//! match, so only the text before it is inspected.

use hisob_core::{
    find_date_dmy, guess_category, parse_plain_amount, CandidateTransaction, TxnKind,
};
use regex::Regex;

/// Parse one UzCard alert into a candidate transaction. A message with no
/// recognizable amount still returns a structurally valid record.
pub fn parse_sms_uzcard(text: &str) -> CandidateTransaction {
    let mut txn = CandidateTransaction::from_raw(text);

    txn.card = card_suffix(text);

    if let Some((amount, start)) = amount_match(text) {
        txn.amount = Some(amount);
        let lower = text.to_lowercase();
        if text[..start].contains('+')
            || lower.contains("popolnenie")
            || lower.contains("zachislenie")
        {
            txn.kind = TxnKind::Income;
        }
    }

    txn.merchant = merchant_segment(text);
    txn.date = find_date_dmy(text);
    if let Some(merchant) = &txn.merchant {
        txn.category = guess_category(merchant);
    }
    txn
}

fn card_suffix(text: &str) -> Option<String> {
    let re = Regex::new(r"[Kk]arta\s*\*(\d{4})").ok()?;
    let caps = re.captures(text)?;
    Some(format!("*{}", &caps[1]))
}

/// The two-decimal currency-suffixed figure, plus the byte offset where the
/// whole match (sign included) began.
fn amount_match(text: &str) -> Option<(f64, usize)> {
    let re = Regex::new(r"(?i)[-+]?([\d\s,]+\.\d{2})\s*(?:UZS|сум)").ok()?;
    let caps = re.captures(text)?;
    let amount = parse_plain_amount(&caps[1])?;
    let start = caps.get(0)?.start();
    Some((amount, start))
}

/// First `.`/`;`-delimited segment that is not a currency figure, card or
/// balance marker, or date fragment — that segment is the merchant.
fn merchant_segment(text: &str) -> Option<String> {
    let split_re = Regex::new(r"[.;]\s*").ok()?;
    let noise_re = Regex::new(r"(?i)UZS|сум|Karta|Balans|\d{2}[./]\d{2}[./]\d{2,4}").ok()?;
    let junk_re = Regex::new(r"^[\d\s,.:+\-]+$").ok()?;
    for part in split_re.split(text) {
        let part = part.trim();
        if part.chars().count() < 2 {
            continue;
        }
        if noise_re.is_match(part) || junk_re.is_match(part) {
            continue;
        }
        return Some(part.to_string());
    }
    None
}
