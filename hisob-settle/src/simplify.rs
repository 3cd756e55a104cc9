//! Greedy settlement of signed net balances into point-to-point transfers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Balances inside this band count as already settled.
const EPSILON: f64 = 0.01;

/// One proposed payment toward zeroing the group's balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementTransfer {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

pub(crate) fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Settle all debts with a small number of transfers.
///
/// The largest remaining debtor pays the largest remaining creditor the
/// smaller of the two amounts, repeatedly, until one side is exhausted.
/// Greedy largest-to-largest keeps the transfer count low but is not an
/// exact minimum-transfer solver, and that is the contract. Ties in amount
/// break on member name so map iteration order cannot leak into the output.
pub fn simplify_debts(balances: &HashMap<String, f64>) -> Vec<SettlementTransfer> {
    let mut creditors: Vec<(&str, f64)> = Vec::new();
    let mut debtors: Vec<(&str, f64)> = Vec::new();
    for (member, &balance) in balances {
        if balance > EPSILON {
            creditors.push((member.as_str(), balance));
        } else if balance < -EPSILON {
            debtors.push((member.as_str(), -balance));
        }
    }

    let descending = |a: &(&str, f64), b: &(&str, f64)| b.1.total_cmp(&a.1).then(a.0.cmp(b.0));
    creditors.sort_by(descending);
    debtors.sort_by(descending);

    let mut transfers = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let amount = debtors[i].1.min(creditors[j].1);
        if amount > EPSILON {
            transfers.push(SettlementTransfer {
                from: debtors[i].0.to_string(),
                to: creditors[j].0.to_string(),
                amount: round_cents(amount),
            });
        }
        debtors[i].1 -= amount;
        creditors[j].1 -= amount;
        if debtors[i].1 < EPSILON {
            i += 1;
        }
        if creditors[j].1 < EPSILON {
            j += 1;
        }
    }
    transfers
}
