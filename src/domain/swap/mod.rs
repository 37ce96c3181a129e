//! Swap domain - atomic native <-> coin exchange

mod journal;
mod swap_engine;
mod vault;

pub use swap_engine::{EngineSnapshot, SwapEngine};
pub use vault::NativeVault;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::pricing::QuoteSide;
use crate::shared::types::{Address, Wei};

/// Stages a swap request passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapStage {
    Validating,
    Pricing,
    LiquidityCheck,
    Settling,
    Done,
    Rejected,
}

impl SwapStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapStage::Validating => "validating",
            SwapStage::Pricing => "pricing",
            SwapStage::LiquidityCheck => "liquidity_check",
            SwapStage::Settling => "settling",
            SwapStage::Done => "done",
            SwapStage::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SwapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a committed swap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapReceipt {
    pub event_id: Uuid,
    pub account: Address,
    pub coin: String,
    pub side: QuoteSide,
    pub rate: u128,
    pub amount_in: Wei,
    pub amount_out: Wei,
    pub reserve_after: Wei,
    pub balance_after: Wei,
    pub stage: SwapStage,
    pub executed_at: DateTime<Utc>,
}

impl SwapReceipt {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
