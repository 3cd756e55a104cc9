//! Humo SMS alert parser.
//!
//! Expected shape:
//!
//!   HUMO *5678: Spisanie 250,000 UZS. Macro. 12/02/2026. Ost: 1,200,000 UZS
//!
//! Unlike the UzCard variant, direction is decided from deposit keywords
//! anywhere in the text before any amount is read, and the amount is taken
//! preferentially from behind an action verb, falling back to a bare
//! currency-suffixed figure. Decimals are optional in both.

use hisob_core::{
    find_date_dmy, guess_category, parse_plain_amount, CandidateTransaction, TxnKind,
};
use regex::Regex;

/// Parse one Humo alert into a candidate transaction. A message with no
/// recognizable amount still returns a structurally valid record.
pub fn parse_sms_humo(text: &str) -> CandidateTransaction {
    let mut txn = CandidateTransaction::from_raw(text);

    txn.card = card_suffix(text);

    if let Ok(re) = Regex::new(r"(?i)popolnenie|zachislenie|kirim") {
        if re.is_match(text) {
            txn.kind = TxnKind::Income;
        }
    }

    txn.amount = amount_figure(text);
    txn.merchant = merchant_segment(text);
    txn.date = find_date_dmy(text);
    if let Some(merchant) = &txn.merchant {
        txn.category = guess_category(merchant);
    }
    txn
}

fn card_suffix(text: &str) -> Option<String> {
    let re = Regex::new(r"(?i)HUMO\s*\*(\d{4})").ok()?;
    let caps = re.captures(text)?;
    Some(format!("HUMO *{}", &caps[1]))
}

/// Amount behind an action verb wins; a bare currency-suffixed figure is the
/// fallback for terse alerts. An action-verb match whose figure fails to
/// parse does not fall back.
fn amount_figure(text: &str) -> Option<f64> {
    let action_re = Regex::new(
        r"(?i)(?:Spisanie|Popolnenie|Zachislenie|Oplata|Chiqim|Kirim)\s+([\d\s,]+(?:\.\d{2})?)\s*(?:UZS|сум)",
    )
    .ok()?;
    if let Some(caps) = action_re.captures(text) {
        return parse_plain_amount(&caps[1]);
    }
    let bare_re = Regex::new(r"(?i)([\d\s,]+(?:\.\d{2})?)\s*(?:UZS|сум)").ok()?;
    let caps = bare_re.captures(text)?;
    parse_plain_amount(&caps[1])
}

/// First `.`/`;`-delimited segment free of Humo's own noise vocabulary —
/// currency words, card and balance markers, action verbs, date fragments.
fn merchant_segment(text: &str) -> Option<String> {
    let split_re = Regex::new(r"[.;]\s*").ok()?;
    let noise_re = Regex::new(
        r"(?i)UZS|сум|HUMO|Ost|Spisanie|Popolnenie|Zachislenie|Oplata|Chiqim|Kirim|\d{2}[./]\d{2}[./]\d{2,4}",
    )
    .ok()?;
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
