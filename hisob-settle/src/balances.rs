//! Net position aggregation for a shared-expense group.
//!
//! The payer's balance goes up by the full expense amount; every
//! share-holder's balance goes down by their share. Positive = is owed
//! money, negative = owes money; a closed group sums to roughly zero.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::simplify::round_cents;

/// One member's share of a group expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub member: String,
    pub amount: f64,
}

/// A group expense paid by one member and split across several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedExpense {
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
    pub shares: Vec<Share>,
    /// Settled expenses no longer move anyone's balance.
    pub settled: bool,
}

/// Split an amount equally across the members, each share rounded to cents.
pub fn equal_shares(amount: f64, members: &[String]) -> Vec<Share> {
    if members.is_empty() {
        return Vec::new();
    }
    let share = round_cents(amount / members.len() as f64);
    members
        .iter()
        .map(|member| Share {
            member: member.clone(),
            amount: share,
        })
        .collect()
}

/// Signed net position per member across all unsettled expenses.
pub fn net_balances(expenses: &[SharedExpense]) -> HashMap<String, f64> {
    let mut balances: HashMap<String, f64> = HashMap::new();
    for exp in expenses {
        if exp.settled {
            continue;
        }
        *balances.entry(exp.paid_by.clone()).or_insert(0.0) += exp.amount;
        for share in &exp.shares {
            *balances.entry(share.member.clone()).or_insert(0.0) -= share.amount;
        }
    }
    balances
}
