use std::fs;
use std::path::Path;
use crate::shared::types::SwapConfig;
use crate::shared::errors::AppError;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "Config.toml";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from Config.toml in the working directory
    pub fn load_config() -> Result<SwapConfig, AppError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from an explicit path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<SwapConfig, AppError> {
        let config_content = fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::ConfigError(format!("Failed to read config file: {}", e)))?;

        Self::parse(&config_content)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<SwapConfig, AppError> {
        if path.as_ref().exists() {
            Self::load_from(path)
        } else {
            Ok(SwapConfig::default())
        }
    }

    pub fn parse(content: &str) -> Result<SwapConfig, AppError> {
        let config: SwapConfig = toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &SwapConfig) -> Result<(), AppError> {
        if config.exchange.default_rate == 0 {
            return Err(AppError::ConfigError("default_rate must be positive".to_string()));
        }
        for coin in &config.exchange.seed_coins {
            if coin.rate == 0 {
                return Err(AppError::ConfigError(format!("seed coin {} has zero rate", coin.name)));
            }
        }
        Ok(())
    }
}
