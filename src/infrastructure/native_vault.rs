//! In-memory native currency vault

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::domain::swap::NativeVault;
use crate::shared::errors::TransferError;
use crate::shared::types::{Address, Wei};

/// Native balances of every account plus the exchange treasury
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryVault {
    balances: HashMap<Address, Wei>,
    treasury: Wei,
    /// Recipients whose incoming payouts fail (simulates a reverting receiver)
    #[serde(default)]
    rejecting: HashSet<Address>,
}

impl InMemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint native currency to an account (dev funding)
    pub fn faucet(&mut self, account: &Address, amount: Wei) -> Result<Wei, TransferError> {
        let balance = self.balances.entry(*account).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(TransferError::Overflow)?;
        debug!(account = %account, amount, "faucet");
        Ok(*balance)
    }

    /// Add native currency straight into the treasury
    pub fn fund_treasury(&mut self, amount: Wei) -> Result<Wei, TransferError> {
        self.treasury = self.treasury.checked_add(amount).ok_or(TransferError::Overflow)?;
        Ok(self.treasury)
    }

    pub fn balance_of(&self, account: &Address) -> Wei {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn reject_payments_to(&mut self, account: &Address) {
        self.rejecting.insert(*account);
    }

    pub fn accept_payments_to(&mut self, account: &Address) {
        self.rejecting.remove(account);
    }
}

impl NativeVault for InMemoryVault {
    fn collect(&mut self, from: &Address, amount: Wei) -> Result<(), TransferError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(TransferError::InsufficientFunds {
                account: from.to_string(),
                requested: amount,
                available,
            });
        }
        let treasury = self.treasury.checked_add(amount).ok_or(TransferError::Overflow)?;
        self.balances.insert(*from, available - amount);
        self.treasury = treasury;
        Ok(())
    }

    fn refund(&mut self, to: &Address, amount: Wei) {
        self.treasury = self.treasury.saturating_sub(amount);
        let balance = self.balances.entry(*to).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    fn pay(&mut self, to: &Address, amount: Wei) -> Result<(), TransferError> {
        if self.rejecting.contains(to) {
            return Err(TransferError::RecipientRejected(to.to_string()));
        }
        if self.treasury < amount {
            return Err(TransferError::InsufficientTreasury {
                requested: amount,
                available: self.treasury,
            });
        }
        let balance = self.balance_of(to);
        let next = balance.checked_add(amount).ok_or(TransferError::Overflow)?;
        self.treasury -= amount;
        self.balances.insert(*to, next);
        Ok(())
    }

    fn treasury(&self) -> Wei {
        self.treasury
    }
}
