//! Utility functions and helpers

use crate::shared::errors::AppError;
use crate::shared::types::{Wei, DECIMALS};

/// Parse a decimal string ("0.05") into smallest units with `decimals` places.
/// No floating point is involved, so the result is exact.
pub fn parse_units(input: &str, decimals: u8) -> Result<Wei, AppError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AppError::InvalidInput("empty amount".to_string()));
    }

    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };

    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidInput(format!("Invalid amount: {}", input)));
    }
    if whole.is_empty() && frac.is_empty() {
        return Err(AppError::InvalidInput(format!("Invalid amount: {}", input)));
    }
    if frac.len() > decimals as usize {
        return Err(AppError::InvalidInput(format!(
            "Too many decimal places in {} (max {})",
            input, decimals
        )));
    }

    let overflow = || AppError::InvalidInput(format!("Amount too large: {}", input));
    let scale = 10u128.checked_pow(decimals as u32).ok_or_else(overflow)?;

    let whole_value: Wei = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };

    let frac_value: Wei = if frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", frac, width = decimals as usize);
        padded.parse().map_err(|_| overflow())?
    };

    whole_value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(overflow)
}

/// Parse an 18-decimal amount ("0.05" native or token)
pub fn parse_ether(input: &str) -> Result<Wei, AppError> {
    parse_units(input, DECIMALS)
}

/// Format smallest units as a decimal string, trimming trailing zeros
pub fn format_units(amount: Wei, decimals: u8) -> String {
    let (whole, frac) = match 10u128.checked_pow(decimals as u32) {
        Some(scale) => (amount / scale, amount % scale),
        // scale beyond u128: every amount is a pure fraction
        None => (0, amount),
    };
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0>width$}", frac, width = decimals as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

/// Format an 18-decimal amount
pub fn format_ether(amount: Wei) -> String {
    format_units(amount, DECIMALS)
}

/// Generate unique ID
pub fn generate_id() -> uuid::Uuid {
    uuid::Uuid::new_v4()
}
