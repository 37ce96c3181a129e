//! Application services and use cases

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::events::{EventSink, TracingSink};
use crate::domain::pricing::{Quote, QuoteSide};
use crate::domain::registry::Coin;
use crate::domain::swap::{EngineSnapshot, NativeVault, SwapEngine, SwapReceipt};
use crate::infrastructure::{InMemoryVault, JsonStateStore, PersistedState};
use crate::shared::errors::AppError;
use crate::shared::types::{Address, SwapConfig, Wei};

/// Application service for exchange operations.
///
/// Quotes and balance reads take the read lock; everything that mutates
/// takes the write lock, so operations never interleave.
#[derive(Clone)]
pub struct ExchangeService {
    engine: Arc<RwLock<SwapEngine<InMemoryVault>>>,
    operator: Address,
    default_rate: u128,
}

impl ExchangeService {
    /// Fresh exchange seeded from config
    pub fn new(config: &SwapConfig) -> Result<Self, AppError> {
        let engine = SwapEngine::with_seed_coins(InMemoryVault::new(), &config.exchange.seed_coins)?;
        Ok(Self::with_engine(engine, config))
    }

    /// Exchange resumed from persisted state
    pub fn from_state(state: PersistedState, config: &SwapConfig) -> Self {
        Self::with_engine(SwapEngine::from_snapshot(state.engine, state.vault), config)
    }

    /// Resume from `store` if it holds state, else start fresh
    pub fn open(config: &SwapConfig, store: &JsonStateStore) -> Result<Self, AppError> {
        match store.load()? {
            Some(state) => Ok(Self::from_state(state, config)),
            None => Self::new(config),
        }
    }

    fn with_engine(mut engine: SwapEngine<InMemoryVault>, config: &SwapConfig) -> Self {
        engine.subscribe(Arc::new(TracingSink));
        Self {
            engine: Arc::new(RwLock::new(engine)),
            operator: config.exchange.operator,
            default_rate: config.exchange.default_rate as u128,
        }
    }

    pub fn operator(&self) -> &Address {
        &self.operator
    }

    pub async fn subscribe(&self, sink: Arc<dyn EventSink>) {
        self.engine.write().await.subscribe(sink);
    }

    fn ensure_operator(&self, caller: &Address) -> Result<(), AppError> {
        if caller != &self.operator {
            warn!(caller = %caller, "🚫 operator-only call refused");
            return Err(AppError::Unauthorized(caller.to_string()));
        }
        Ok(())
    }

    // ---- operator ----

    /// Register a coin. `rate` falls back to the configured default.
    pub async fn add_coin(
        &self,
        caller: &Address,
        name: &str,
        symbol: &str,
        rate: Option<u128>,
    ) -> Result<Coin, AppError> {
        self.ensure_operator(caller)?;
        let rate = rate.unwrap_or(self.default_rate);
        Ok(self.engine.write().await.add_coin(name, symbol, rate)?)
    }

    pub async fn deactivate_coin(&self, caller: &Address, name: &str) -> Result<Coin, AppError> {
        self.ensure_operator(caller)?;
        Ok(self.engine.write().await.deactivate_coin(name)?)
    }

    pub async fn fund_reserve(&self, caller: &Address, name: &str, amount: Wei) -> Result<Coin, AppError> {
        self.ensure_operator(caller)?;
        Ok(self.engine.write().await.fund_reserve(name, amount)?)
    }

    // ---- reads ----

    pub async fn coins(&self) -> Vec<Coin> {
        self.engine.read().await.coins().into_iter().cloned().collect()
    }

    pub async fn get_coin(&self, name: &str) -> Result<Coin, AppError> {
        Ok(self.engine.read().await.get_coin(name)?.clone())
    }

    pub async fn get_balance(&self, coin: &str, account: &Address) -> Result<Wei, AppError> {
        Ok(self.engine.read().await.get_balance(coin, account)?)
    }

    pub async fn quote(&self, side: QuoteSide, amount_in: Wei, coin: &str) -> Result<Quote, AppError> {
        Ok(self.engine.read().await.quote(side, amount_in, coin)?)
    }

    pub async fn native_balance(&self, account: &Address) -> Wei {
        self.engine.read().await.vault().balance_of(account)
    }

    pub async fn treasury(&self) -> Wei {
        self.engine.read().await.vault().treasury()
    }

    pub async fn snapshot(&self) -> EngineSnapshot {
        self.engine.read().await.snapshot()
    }

    // ---- swaps ----

    pub async fn swap_native_to_coin(
        &self,
        account: &Address,
        coin: &str,
        native_in: Wei,
    ) -> Result<SwapReceipt, AppError> {
        Ok(self.engine.write().await.swap_native_to_coin(account, coin, native_in)?)
    }

    pub async fn swap_coin_to_native(
        &self,
        account: &Address,
        coin: &str,
        token_in: Wei,
    ) -> Result<SwapReceipt, AppError> {
        Ok(self.engine.write().await.swap_coin_to_native(account, coin, token_in)?)
    }

    /// Dev funding of native currency
    pub async fn faucet(&self, account: &Address, amount: Wei) -> Result<Wei, AppError> {
        let balance = self.engine.write().await.vault_mut().faucet(account, amount)?;
        info!(account = %account, amount, balance, "🚰 faucet");
        Ok(balance)
    }

    // ---- persistence ----

    pub async fn save(&self, store: &JsonStateStore) -> Result<(), AppError> {
        let state = {
            let engine = self.engine.read().await;
            PersistedState::new(engine.snapshot(), engine.vault().clone())
        };
        store.save(&state)
    }
}
