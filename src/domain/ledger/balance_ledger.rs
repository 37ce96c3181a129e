//! Balance ledger keyed by (coin, account)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::errors::SwapError;
use crate::shared::types::{Address, Wei};

/// Token balances. Entries are created on first credit and stay, even at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceLedger {
    balances: HashMap<String, HashMap<Address, Wei>>,
}

impl BalanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the account's balance. Returns the previous balance.
    pub fn credit(&mut self, account: &Address, coin: &str, amount: Wei) -> Wei {
        let entry = self
            .balances
            .entry(coin.to_string())
            .or_default()
            .entry(*account)
            .or_insert(0);
        let previous = *entry;
        // bounded by the coin's supply
        *entry = previous.saturating_add(amount);
        previous
    }

    /// Subtract `amount`. Returns the previous balance.
    pub fn debit(&mut self, account: &Address, coin: &str, amount: Wei) -> Result<Wei, SwapError> {
        let available = self.balance_of(account, coin);
        if available < amount {
            return Err(SwapError::InsufficientBalance {
                requested: amount,
                available,
            });
        }
        if amount == 0 {
            return Ok(available);
        }
        if let Some(balance) = self
            .balances
            .get_mut(coin)
            .and_then(|holders| holders.get_mut(account))
        {
            *balance = available - amount;
        }
        Ok(available)
    }

    pub fn balance_of(&self, account: &Address, coin: &str) -> Wei {
        self.balances
            .get(coin)
            .and_then(|holders| holders.get(account))
            .copied()
            .unwrap_or(0)
    }

    /// Accounts holding an entry for `coin`, sorted
    pub fn holders(&self, coin: &str) -> Vec<(Address, Wei)> {
        let mut holders: Vec<(Address, Wei)> = self
            .balances
            .get(coin)
            .map(|h| h.iter().map(|(a, b)| (*a, *b)).collect())
            .unwrap_or_default();
        holders.sort_by_key(|(a, _)| *a);
        holders
    }

    /// Sum of all balances of `coin`
    pub fn total_of(&self, coin: &str) -> Wei {
        self.balances
            .get(coin)
            .map(|h| h.values().fold(0u128, |acc, b| acc.saturating_add(*b)))
            .unwrap_or(0)
    }

    /// Raw entry lookup; `None` when the account never held the coin
    pub(crate) fn entry(&self, account: &Address, coin: &str) -> Option<Wei> {
        self.balances.get(coin).and_then(|h| h.get(account)).copied()
    }

    /// Rollback hook: put an entry back to a journaled value, dropping it
    /// when it did not exist before
    pub(crate) fn restore(&mut self, account: &Address, coin: &str, previous: Option<Wei>) {
        match previous {
            Some(value) => {
                self.balances
                    .entry(coin.to_string())
                    .or_default()
                    .insert(*account, value);
            }
            None => {
                if let Some(holders) = self.balances.get_mut(coin) {
                    holders.remove(account);
                    if holders.is_empty() {
                        self.balances.remove(coin);
                    }
                }
            }
        }
    }
}
