//! Bulk SMS splitter: a block of several alerts pasted together in,
//! candidate transactions out, in input order.

use hisob_core::CandidateTransaction;
use regex::Regex;

use super::sms_humo::parse_sms_humo;
use super::sms_uzcard::parse_sms_uzcard;

/// Split a pasted block into individual messages and run each through the
/// issuer variant its marker selects. Chunks that yield no amount are
/// dropped.
pub fn parse_sms_bulk(text_block: &str) -> Vec<CandidateTransaction> {
    let block = text_block.trim();
    if block.is_empty() {
        return Vec::new();
    }

    let mut chunks = split_blank_lines(block);
    if chunks.len() == 1 {
        chunks = split_at_markers(block);
    }

    chunks
        .into_iter()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(dispatch)
        .filter(|txn| txn.has_amount())
        .collect()
}

/// Pick the issuer variant by marker keyword. UzCard handles both its own
/// marker and unmarked chunks, as a best-effort guess.
fn dispatch(chunk: &str) -> CandidateTransaction {
    if chunk.to_lowercase().contains("humo") {
        parse_sms_humo(chunk)
    } else {
        parse_sms_uzcard(chunk)
    }
}

fn split_blank_lines(block: &str) -> Vec<&str> {
    match Regex::new(r"\n\s*\n") {
        Ok(re) => re.split(block).collect(),
        Err(_) => vec![block],
    }
}

/// Messages pasted with no blank line between them are cut immediately
/// before each issuer marker. The regex crate has no lookahead, so the cut
/// points come from the match offsets themselves.
fn split_at_markers(block: &str) -> Vec<&str> {
    let re = match Regex::new(r"(?i)(?:Karta|HUMO)\s*\*\d{4}") {
        Ok(re) => re,
        Err(_) => return vec![block],
    };
    let starts: Vec<usize> = re.find_iter(block).map(|m| m.start()).collect();
    if starts.is_empty() {
        return vec![block];
    }

    let mut chunks = Vec::new();
    let mut prev = 0;
    for &start in &starts {
        if start > prev {
            chunks.push(&block[prev..start]);
        }
        prev = start;
    }
    chunks.push(&block[prev..]);
    chunks
}
