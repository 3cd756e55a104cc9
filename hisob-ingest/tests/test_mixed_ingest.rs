//! End-to-end ingestion over realistic mixed input: a pasted SMS block with
//! both issuer formats, a Cyrillic bank export, and an OCR receipt.

use chrono::NaiveDate;
use hisob_core::{CandidateTransaction, Category, Currency, TxnKind};
use hisob_ingest::{parse_csv_export, parse_receipt_text, parse_sms_bulk};

fn assert_candidate_invariant(txn: &CandidateTransaction) {
    // Emitted candidates carry either no amount or a strictly positive one.
    if let Some(amount) = txn.amount {
        assert!(amount > 0.0, "non-positive amount in {txn:?}");
    }
    assert!(matches!(txn.kind, TxnKind::Income | TxnKind::Expense));
}

#[test]
fn test_pasted_mixed_issuer_block() {
    let block = "\
Karta *1234: -150,000.00 UZS. Korzinka. 12.02.2026 14:30. Balans: 3,500,000.00 UZS

HUMO *5678: Spisanie 250,000 UZS. Macro. 12/02/2026. Ost: 1,200,000 UZS

Karta *1234: parol kodi 4821";

    let txns = parse_sms_bulk(block);
    assert_eq!(txns.len(), 2, "the amount-less OTP chunk must be dropped");

    assert_eq!(txns[0].card.as_deref(), Some("*1234"));
    assert_eq!(txns[0].amount, Some(150000.0));
    assert_eq!(txns[0].merchant.as_deref(), Some("Korzinka"));
    assert_eq!(txns[0].category, Category::Food);
    assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2026, 2, 12));

    assert_eq!(txns[1].card.as_deref(), Some("HUMO *5678"));
    assert_eq!(txns[1].amount, Some(250000.0));
    assert_eq!(txns[1].category, Category::Food);

    for txn in &txns {
        assert_candidate_invariant(txn);
    }
}

#[test]
fn test_cyrillic_statement_roundtrip() {
    let text = "\
Дата;Сумма;Описание;Валюта
2026-02-12;-45000;Korzinka Sergeli;UZS
2026-02-14;-12.50;Steam;USD
2026-02-15;2500000;Oylik;UZS
";
    let (bytes, _, _) = encoding_rs::WINDOWS_1251.encode(text);
    let txns = parse_csv_export(&bytes).expect("two-step decode should succeed");
    assert_eq!(txns.len(), 3);

    assert_eq!(txns[0].kind, TxnKind::Expense);
    assert_eq!(txns[0].category, Category::Food);
    assert_eq!(txns[1].currency, Currency::Usd);
    assert_eq!(txns[1].amount, Some(12.50));
    assert_eq!(txns[2].kind, TxnKind::Income);

    for txn in &txns {
        assert_candidate_invariant(txn);
    }
}

#[test]
fn test_receipt_feeds_the_same_shape() {
    let ocr = "\
OQTEPA LAVASH
CHEK N 99812
Lavash katta    28.000
Cola 1L          8.000
JAMI: 36.000
07.08.2026 13:05";

    let txn = parse_receipt_text(ocr);
    assert_eq!(txn.amount, Some(36000.0));
    assert_eq!(txn.merchant.as_deref(), Some("OQTEPA LAVASH"));
    assert_eq!(txn.category, Category::Food);
    assert_eq!(txn.currency, Currency::Uzs);
    assert_eq!(txn.date, NaiveDate::from_ymd_opt(2026, 8, 7));
    assert_candidate_invariant(&txn);
}
