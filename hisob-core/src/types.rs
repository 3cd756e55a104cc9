use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Supported settlement currencies. Anything else a statement mentions is
/// unrecognized and falls back to UZS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "UZS")]
    Uzs,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// Parse a currency code cell. Only the two supported codes resolve.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "UZS" => Some(Currency::Uzs),
            "USD" => Some(Currency::Usd),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Uzs => "UZS",
            Currency::Usd => "USD",
        }
    }
}

/// Direction of money movement. The sign is never kept on the amount itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxnKind {
    #[serde(rename = "income")]
    Income,
    #[default]
    #[serde(rename = "expense")]
    Expense,
}

/// Expense categories of the budgeting app this core feeds. `Other` is the
/// classifier fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Shopping,
    Health,
    Entertainment,
    Education,
    Housing,
    #[default]
    Other,
}

/// Normalized output of every extractor: one record per input unit (one
/// receipt, one SMS, one CSV row).
///
/// Fields degrade independently; a record with `amount: None` is still
/// structurally valid and is dropped by the caller rather than raised as an
/// error. The caller owns identity and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateTransaction {
    /// Extracted amount, strictly positive when present; direction lives in
    /// `kind`.
    pub amount: Option<f64>,
    pub currency: Currency,
    #[serde(rename = "type")]
    pub kind: TxnKind,
    pub category: Category,
    /// Merchant name; doubles as the free-text description.
    pub merchant: Option<String>,
    /// Card suffix as the issuer prints it ("*1234", "HUMO *5678"). Only SMS
    /// alerts carry one.
    pub card: Option<String>,
    pub date: Option<NaiveDate>,
    /// Original source text, retained for audit. Never parsed twice.
    pub raw: String,
}

impl CandidateTransaction {
    /// Empty candidate carrying the raw source text and every default.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            amount: None,
            currency: Currency::Uzs,
            kind: TxnKind::Expense,
            category: Category::Other,
            merchant: None,
            card: None,
            date: None,
            raw: raw.into(),
        }
    }

    pub fn has_amount(&self) -> bool {
        self.amount.is_some()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TxnKind::Income
    }
}
