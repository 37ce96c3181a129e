// src/app.rs
use anyhow::{Context, Result};
use tracing::info;

use coinswap::application::{CommandExecutor, Commands, ExchangeService};
use coinswap::infrastructure::JsonStateStore;
use coinswap::shared::config::{ConfigLoader, DEFAULT_CONFIG_FILE};
use coinswap::shared::types::SwapConfig;

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub config: SwapConfig,
    pub state_path: String,
}

impl AppCfg {
    /// Config file if given, else `Config.toml` when present, else defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path))?,
            None => ConfigLoader::load_or_default(DEFAULT_CONFIG_FILE)
                .context("Failed to load default config")?,
        };
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: SwapConfig) -> Self {
        Self {
            state_path: config.storage.state_path.clone(),
            config,
        }
    }

    /// CLI values win over the config file
    pub fn with_overrides(mut self, state: Option<String>) -> Self {
        if let Some(state) = state {
            self.state_path = state;
        }
        self
    }
}

pub async fn run(app_cfg: AppCfg, command: Commands) -> Result<()> {
    info!("Starting coinswap with state at {}", app_cfg.state_path);

    let store = JsonStateStore::new(&app_cfg.state_path);
    let service = ExchangeService::open(&app_cfg.config, &store).context("Failed to open exchange")?;

    CommandExecutor::execute(command, &service, &store).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_state_overrides_config() {
        let cfg = AppCfg::from_config(SwapConfig::default());
        assert_eq!(cfg.state_path, "coinswap-state.json");

        let cfg = cfg.with_overrides(Some("/tmp/other.json".to_string()));
        assert_eq!(cfg.state_path, "/tmp/other.json");

        let cfg = cfg.with_overrides(None);
        assert_eq!(cfg.state_path, "/tmp/other.json");
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        assert!(AppCfg::load(Some("/definitely/not/here.toml")).is_err());
    }
}
