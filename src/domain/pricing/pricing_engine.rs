//! Pure conversion functions between native and token amounts.
//!
//! Both sides use 18-decimal smallest units, so the conversion is a plain
//! multiply (native -> token) or floor divide (token -> native) by the coin
//! rate. Going there and back never gains value.

use super::{Quote, QuoteSide};
use crate::domain::registry::Coin;
use crate::shared::errors::SwapError;
use crate::shared::types::Wei;

/// Stateless pricing functions
pub struct PricingEngine;

impl PricingEngine {
    /// `amount_native * rate`, checked
    pub fn native_to_token(amount_native: Wei, coin: &Coin) -> Result<Wei, SwapError> {
        Self::mul_rate(amount_native, coin.rate)
    }

    /// `floor(amount_token / rate)`
    pub fn token_to_native(amount_token: Wei, coin: &Coin) -> Result<Wei, SwapError> {
        Self::div_rate(amount_token, coin.rate)
    }

    pub fn quote_native_to_token(amount_native: Wei, coin: &Coin) -> Result<Quote, SwapError> {
        Ok(Quote {
            coin: coin.name.clone(),
            side: QuoteSide::NativeToToken,
            rate: coin.rate,
            amount_in: amount_native,
            amount_out: Self::native_to_token(amount_native, coin)?,
        })
    }

    pub fn quote_token_to_native(amount_token: Wei, coin: &Coin) -> Result<Quote, SwapError> {
        Ok(Quote {
            coin: coin.name.clone(),
            side: QuoteSide::TokenToNative,
            rate: coin.rate,
            amount_in: amount_token,
            amount_out: Self::token_to_native(amount_token, coin)?,
        })
    }

    /// Token dust lost when converting `amount_token` back to native
    pub fn conversion_remainder(amount_token: Wei, coin: &Coin) -> Result<Wei, SwapError> {
        if coin.rate == 0 {
            return Err(SwapError::DivisionByZero);
        }
        Ok(amount_token % coin.rate)
    }

    fn mul_rate(amount: Wei, rate: u128) -> Result<Wei, SwapError> {
        amount.checked_mul(rate).ok_or(SwapError::ArithmeticOverflow)
    }

    fn div_rate(amount: Wei, rate: u128) -> Result<Wei, SwapError> {
        amount.checked_div(rate).ok_or(SwapError::DivisionByZero)
    }
}
