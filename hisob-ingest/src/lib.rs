//! hisob-ingest: extractors that turn OCR receipt text, mobile-banking SMS
//! alerts, and bank CSV exports into [`hisob_core::CandidateTransaction`]s.
//!
//! All extractors are pure and best-effort: a malformed unit degrades field
//! by field instead of failing the batch. The only hard error is a CSV byte
//! stream no supported encoding can decode.

pub mod parsers;

pub use parsers::csv_export::{parse_csv_export, parse_csv_text};
pub use parsers::receipt::parse_receipt_text;
pub use parsers::sms_bulk::parse_sms_bulk;
pub use parsers::sms_humo::parse_sms_humo;
pub use parsers::sms_uzcard::parse_sms_uzcard;
