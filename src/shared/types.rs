//! Common types used across the exchange

use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Smallest unit of any amount (native or token), 18-decimal fixed point
pub type Wei = u128;

/// Decimals shared by the native currency and every coin
pub const DECIMALS: u8 = 18;

/// One whole unit in smallest units (1e18)
pub const WEI_PER_UNIT: Wei = 1_000_000_000_000_000_000;

/// Default native-to-token rate for seeded coins
pub const DEFAULT_RATE: u128 = 1500;

/// Default seeded reserve per coin, in whole tokens
pub const DEFAULT_SEED_RESERVE: u64 = 1_000_000;

/// Account identity: a 20-byte address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    pub const ZERO: Address = Address([0u8; 20]);

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Generate a random address (dev accounts, tests)
    pub fn random() -> Self {
        let mut bytes = [0u8; 20];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let bytes = hex::decode(digits.to_ascii_lowercase())
            .map_err(|e| AppError::InvalidInput(format!("Invalid address {}: {}", s, e)))?;

        let bytes: [u8; 20] = bytes.try_into().map_err(|v: Vec<u8>| {
            AppError::InvalidInput(format!(
                "Invalid address {}: expected 20 bytes, got {}",
                s,
                v.len()
            ))
        })?;

        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Seed coin definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCoinConfig {
    pub name: String,
    pub symbol: String,
    pub rate: u64,
    /// Initial reserve in whole tokens
    pub reserve: u64,
}

/// Exchange configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    pub operator: Address,
    pub default_rate: u64,
    pub seed_coins: Vec<SeedCoinConfig>,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub state_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapConfig {
    pub exchange: ExchangeConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            exchange: ExchangeConfig {
                operator: Address::ZERO,
                default_rate: DEFAULT_RATE as u64,
                seed_coins: vec![
                    SeedCoinConfig {
                        name: "1Coin".to_string(),
                        symbol: "1Coin".to_string(),
                        rate: DEFAULT_RATE as u64,
                        reserve: DEFAULT_SEED_RESERVE,
                    },
                    SeedCoinConfig {
                        name: "FunCoin".to_string(),
                        symbol: "FUN".to_string(),
                        rate: DEFAULT_RATE as u64,
                        reserve: DEFAULT_SEED_RESERVE,
                    },
                ],
            },
            storage: StorageConfig {
                state_path: "coinswap-state.json".to_string(),
            },
            logging: LoggingConfig {
                filter: "info".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_round_trips_through_display() {
        let addr = Address::random();
        let parsed: Address = addr.to_string().parse().unwrap();
        assert_eq!(parsed, addr);
    }

    #[test]
    fn test_address_parse_is_case_insensitive() {
        let lower: Address = "0x00000000000000000000000000000000000000ab".parse().unwrap();
        let upper: Address = "0X00000000000000000000000000000000000000AB".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.as_bytes()[19], 0xab);
    }

    #[test]
    fn test_address_rejects_wrong_length() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("not-hex".parse::<Address>().is_err());
    }

    #[test]
    fn test_default_config_seeds_two_coins() {
        let cfg = SwapConfig::default();
        let names: Vec<_> = cfg.exchange.seed_coins.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["1Coin", "FunCoin"]);
        assert!(cfg.exchange.seed_coins.iter().all(|c| c.rate == 1500));
    }

    #[test]
    fn test_address_serializes_as_hex_string() {
        let addr: Address = "0x00000000000000000000000000000000000000ff".parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x00000000000000000000000000000000000000ff\"");
    }
}
