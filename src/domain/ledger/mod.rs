//! Ledger domain - per-account, per-coin token balances

mod balance_ledger;

pub use balance_ledger::BalanceLedger;
