//! Registry domain - coin definitions and liquidity counters

mod coin_registry;

pub use coin_registry::CoinRegistry;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::types::Wei;

/// A registry-tracked coin with a fixed native-to-token rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub name: String,
    pub symbol: String,
    /// 1 native smallest unit buys `rate` token smallest units
    pub rate: u128,
    pub is_active: bool,
    /// Tokens held by the exchange, available to pay out
    pub reserve: Wei,
    /// Reserve plus every account balance of this coin
    pub supply: Wei,
    /// Insertion order
    pub index: usize,
    pub created_at: DateTime<Utc>,
}

impl Coin {
    /// Tokens currently held by accounts
    pub fn outstanding(&self) -> Wei {
        self.supply.saturating_sub(self.reserve)
    }
}
