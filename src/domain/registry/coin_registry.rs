//! Coin registry: unique names, activity flag, reserve bookkeeping

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Coin;
use crate::shared::errors::SwapError;
use crate::shared::types::Wei;

/// Owns every coin definition, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinRegistry {
    coins: HashMap<String, Coin>,
}

impl CoinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new active coin with an empty reserve
    pub fn add_coin(&mut self, name: &str, symbol: &str, rate: u128) -> Result<&Coin, SwapError> {
        if self.coins.contains_key(name) {
            return Err(SwapError::DuplicateCoin(name.to_string()));
        }
        if rate == 0 {
            return Err(SwapError::InvalidRate(name.to_string()));
        }

        let coin = Coin {
            name: name.to_string(),
            symbol: symbol.to_string(),
            rate,
            is_active: true,
            reserve: 0,
            supply: 0,
            index: self.coins.len(),
            created_at: Utc::now(),
        };

        Ok(self.coins.entry(name.to_string()).or_insert(coin))
    }

    /// Mark a coin inactive. Deactivating twice is not an error.
    pub fn deactivate_coin(&mut self, name: &str) -> Result<&Coin, SwapError> {
        let coin = self.coin_mut(name)?;
        coin.is_active = false;
        Ok(coin)
    }

    pub fn get_coin(&self, name: &str) -> Result<&Coin, SwapError> {
        self.coins
            .get(name)
            .ok_or_else(|| SwapError::UnknownCoin(name.to_string()))
    }

    /// Look up a coin that may take part in swaps
    pub fn get_active_coin(&self, name: &str) -> Result<&Coin, SwapError> {
        let coin = self.get_coin(name)?;
        if !coin.is_active {
            return Err(SwapError::CoinInactive(name.to_string()));
        }
        Ok(coin)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.coins.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// All coins in insertion order
    pub fn coins(&self) -> Vec<&Coin> {
        let mut coins: Vec<&Coin> = self.coins.values().collect();
        coins.sort_by_key(|c| c.index);
        coins
    }

    /// Deposit fresh liquidity into a coin's reserve
    pub fn fund_reserve(&mut self, name: &str, amount: Wei) -> Result<&Coin, SwapError> {
        if amount == 0 {
            return Err(SwapError::ZeroAmount);
        }
        let coin = self.coin_mut(name)?;
        let supply = coin
            .supply
            .checked_add(amount)
            .ok_or(SwapError::ArithmeticOverflow)?;
        // reserve <= supply, so this cannot overflow once supply fits
        coin.reserve += amount;
        coin.supply = supply;
        Ok(coin)
    }

    /// Take tokens out of the reserve. Returns the previous reserve.
    pub(crate) fn withdraw_reserve(&mut self, name: &str, amount: Wei) -> Result<Wei, SwapError> {
        let coin = self.coin_mut(name)?;
        let previous = coin.reserve;
        if previous < amount {
            return Err(SwapError::InsufficientLiquidity {
                requested: amount,
                reserve: previous,
            });
        }
        coin.reserve = previous - amount;
        Ok(previous)
    }

    /// Return tokens to the reserve. Returns the previous reserve.
    pub(crate) fn deposit_reserve(&mut self, name: &str, amount: Wei) -> Result<Wei, SwapError> {
        let coin = self.coin_mut(name)?;
        let previous = coin.reserve;
        let next = previous
            .checked_add(amount)
            .ok_or(SwapError::ArithmeticOverflow)?;
        if next > coin.supply {
            return Err(SwapError::ArithmeticOverflow);
        }
        coin.reserve = next;
        Ok(previous)
    }

    /// Rollback hook: put a reserve back to a journaled value
    pub(crate) fn restore_reserve(&mut self, name: &str, previous: Wei) {
        if let Some(coin) = self.coins.get_mut(name) {
            coin.reserve = previous;
        }
    }

    fn coin_mut(&mut self, name: &str) -> Result<&mut Coin, SwapError> {
        self.coins
            .get_mut(name)
            .ok_or_else(|| SwapError::UnknownCoin(name.to_string()))
    }
}
