//! hisob-settle: net positions for a shared-expense group and the greedy
//! transfer plan that settles them.

pub mod balances;
pub mod simplify;

pub use balances::{equal_shares, net_balances, Share, SharedExpense};
pub use simplify::{simplify_debts, SettlementTransfer};
