//! hisob-core: shared transaction types, the merchant category table, and
//! locale-aware numeric/date normalizers used by every extractor.

pub mod amounts;
pub mod categories;
pub mod dates;
pub mod types;

pub use amounts::{parse_locale_amount, parse_plain_amount};
pub use categories::{guess_category, STORE_CATEGORY_MAP};
pub use dates::{find_date, find_date_dmy, parse_date_cell};
pub use types::{CandidateTransaction, Category, Currency, TxnKind};
