//! Pricing domain - fixed-rate conversions

mod pricing_engine;

pub use pricing_engine::PricingEngine;

use serde::{Deserialize, Serialize};

use crate::shared::types::Wei;

/// Direction of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteSide {
    NativeToToken,
    TokenToNative,
}

/// Read-only quote for a coin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub coin: String,
    pub side: QuoteSide,
    pub rate: u128,
    pub amount_in: Wei,
    pub amount_out: Wei,
}
