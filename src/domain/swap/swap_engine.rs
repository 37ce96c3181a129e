//! Swap engine - orchestrates registry, pricing, ledger and native custody.
//!
//! Every mutating call runs inside an undo journal. If any step fails the
//! journal is unwound newest-first, so registry, ledger and vault end exactly
//! as they were before the call. Events go out only after the commit.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::journal::{Journal, Undo};
use super::{NativeVault, SwapReceipt, SwapStage};
use crate::domain::events::{EventRecord, EventSink, ExchangeEvent};
use crate::domain::ledger::BalanceLedger;
use crate::domain::pricing::{PricingEngine, Quote, QuoteSide};
use crate::domain::registry::{Coin, CoinRegistry};
use crate::shared::errors::{SwapError, TransferError};
use crate::shared::types::{Address, SeedCoinConfig, SwapConfig, Wei, WEI_PER_UNIT};

/// Serializable registry + ledger state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub registry: CoinRegistry,
    pub ledger: BalanceLedger,
}

/// Fixed-rate swap engine over a native vault
pub struct SwapEngine<V: NativeVault> {
    registry: CoinRegistry,
    ledger: BalanceLedger,
    vault: V,
    sinks: Vec<Arc<dyn EventSink>>,
}

impl<V: NativeVault> SwapEngine<V> {
    /// Engine seeded with the two default coins
    pub fn new(vault: V) -> Result<Self, SwapError> {
        Self::with_seed_coins(vault, &SwapConfig::default().exchange.seed_coins)
    }

    /// Engine seeded from explicit coin definitions
    pub fn with_seed_coins(vault: V, seeds: &[SeedCoinConfig]) -> Result<Self, SwapError> {
        let mut registry = CoinRegistry::new();
        for seed in seeds {
            registry.add_coin(&seed.name, &seed.symbol, seed.rate as u128)?;
            let reserve = (seed.reserve as u128)
                .checked_mul(WEI_PER_UNIT)
                .ok_or(SwapError::ArithmeticOverflow)?;
            if reserve > 0 {
                registry.fund_reserve(&seed.name, reserve)?;
            }
            debug!(coin = %seed.name, rate = seed.rate, reserve, "seeded coin");
        }

        Ok(Self {
            registry,
            ledger: BalanceLedger::new(),
            vault,
            sinks: Vec::new(),
        })
    }

    /// Rebuild an engine from persisted state
    pub fn from_snapshot(snapshot: EngineSnapshot, vault: V) -> Self {
        Self {
            registry: snapshot.registry,
            ledger: snapshot.ledger,
            vault,
            sinks: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            registry: self.registry.clone(),
            ledger: self.ledger.clone(),
        }
    }

    /// Register an observer for committed events
    pub fn subscribe(&mut self, sink: Arc<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn registry(&self) -> &CoinRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &BalanceLedger {
        &self.ledger
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    pub fn vault_mut(&mut self) -> &mut V {
        &mut self.vault
    }

    // ---- registry operations ----

    pub fn add_coin(&mut self, name: &str, symbol: &str, rate: u128) -> Result<Coin, SwapError> {
        let coin = self.registry.add_coin(name, symbol, rate)?.clone();
        info!(coin = %name, symbol = %symbol, rate, "✅ coin added");
        self.emit(ExchangeEvent::NewCoinAdded { name: coin.name.clone() });
        Ok(coin)
    }

    pub fn deactivate_coin(&mut self, name: &str) -> Result<Coin, SwapError> {
        let coin = self.registry.deactivate_coin(name)?.clone();
        info!(coin = %name, "coin deactivated");
        self.emit(ExchangeEvent::CoinDeactivated { name: coin.name.clone() });
        Ok(coin)
    }

    pub fn fund_reserve(&mut self, name: &str, amount: Wei) -> Result<Coin, SwapError> {
        let coin = self.registry.fund_reserve(name, amount)?.clone();
        info!(coin = %name, amount, reserve = coin.reserve, "reserve funded");
        self.emit(ExchangeEvent::ReserveFunded {
            name: coin.name.clone(),
            amount,
        });
        Ok(coin)
    }

    pub fn get_coin(&self, name: &str) -> Result<&Coin, SwapError> {
        self.registry.get_coin(name)
    }

    pub fn coins(&self) -> Vec<&Coin> {
        self.registry.coins()
    }

    // ---- read-only queries ----

    pub fn get_balance(&self, coin: &str, account: &Address) -> Result<Wei, SwapError> {
        self.registry.get_coin(coin)?;
        Ok(self.ledger.balance_of(account, coin))
    }

    /// Tokens received for `native_in`
    pub fn get_eth_to_token(&self, native_in: Wei, coin: &str) -> Result<Wei, SwapError> {
        PricingEngine::native_to_token(native_in, self.registry.get_coin(coin)?)
    }

    /// Native currency received for `token_in`
    pub fn get_token_to_eth(&self, token_in: Wei, coin: &str) -> Result<Wei, SwapError> {
        PricingEngine::token_to_native(token_in, self.registry.get_coin(coin)?)
    }

    pub fn quote(&self, side: QuoteSide, amount_in: Wei, coin: &str) -> Result<Quote, SwapError> {
        let coin = self.registry.get_coin(coin)?;
        match side {
            QuoteSide::NativeToToken => PricingEngine::quote_native_to_token(amount_in, coin),
            QuoteSide::TokenToNative => PricingEngine::quote_token_to_native(amount_in, coin),
        }
    }

    // ---- swaps ----

    /// Swap attached native currency for coin tokens
    pub fn swap_native_to_coin(
        &mut self,
        account: &Address,
        coin: &str,
        native_in: Wei,
    ) -> Result<SwapReceipt, SwapError> {
        let (rate, token_out) = self.transact("swap_native_to_coin", |engine, journal, stage| {
            let rate = engine.registry.get_active_coin(coin)?.rate;
            if native_in == 0 {
                return Err(SwapError::ZeroAmount);
            }

            engine.vault.collect(account, native_in)?;
            journal.record(Undo::NativeCollected {
                from: *account,
                amount: native_in,
            });

            *stage = SwapStage::Pricing;
            let token_out = engine.get_eth_to_token(native_in, coin)?;

            *stage = SwapStage::LiquidityCheck;
            let previous = engine.registry.withdraw_reserve(coin, token_out)?;
            journal.record(Undo::Reserve {
                coin: coin.to_string(),
                previous,
            });

            *stage = SwapStage::Settling;
            let previous = engine.ledger.entry(account, coin);
            engine.ledger.credit(account, coin, token_out);
            journal.record(Undo::Balance {
                account: *account,
                coin: coin.to_string(),
                previous,
            });

            Ok((rate, token_out))
        })?;

        let record = self.emit(ExchangeEvent::SwappedNativeToCoin {
            account: *account,
            coin: coin.to_string(),
            native_in,
            token_out,
        });
        info!(account = %account, coin = %coin, native_in, token_out, "✅ swapped native -> coin");

        Ok(self.receipt(record, account, coin, QuoteSide::NativeToToken, rate, native_in, token_out))
    }

    /// Swap coin tokens back for native currency
    pub fn swap_coin_to_native(
        &mut self,
        account: &Address,
        coin: &str,
        token_in: Wei,
    ) -> Result<SwapReceipt, SwapError> {
        let (rate, native_out) = self.transact("swap_coin_to_native", |engine, journal, stage| {
            let rate = engine.registry.get_active_coin(coin)?.rate;
            if token_in == 0 {
                return Err(SwapError::ZeroAmount);
            }

            let previous = engine.ledger.debit(account, coin, token_in)?;
            journal.record(Undo::Balance {
                account: *account,
                coin: coin.to_string(),
                previous: Some(previous),
            });

            *stage = SwapStage::Pricing;
            let native_out = engine.get_token_to_eth(token_in, coin)?;

            *stage = SwapStage::LiquidityCheck;
            let treasury = engine.vault.treasury();
            if treasury < native_out {
                return Err(TransferError::InsufficientTreasury {
                    requested: native_out,
                    available: treasury,
                }
                .into());
            }

            *stage = SwapStage::Settling;
            let previous = engine.registry.deposit_reserve(coin, token_in)?;
            journal.record(Undo::Reserve {
                coin: coin.to_string(),
                previous,
            });
            engine.vault.pay(account, native_out)?;

            Ok((rate, native_out))
        })?;

        let record = self.emit(ExchangeEvent::SwappedCoinToNative {
            account: *account,
            coin: coin.to_string(),
            token_in,
            native_out,
        });
        info!(account = %account, coin = %coin, token_in, native_out, "✅ swapped coin -> native");

        Ok(self.receipt(record, account, coin, QuoteSide::TokenToNative, rate, token_in, native_out))
    }

    /// Run `body` as one all-or-nothing unit
    fn transact<T>(
        &mut self,
        op: &'static str,
        body: impl FnOnce(&mut Self, &mut Journal, &mut SwapStage) -> Result<T, SwapError>,
    ) -> Result<T, SwapError> {
        let mut journal = Journal::default();
        let mut stage = SwapStage::Validating;

        match body(self, &mut journal, &mut stage) {
            Ok(value) => {
                debug!(op, stage = %SwapStage::Done, changes = journal.len(), "committed");
                Ok(value)
            }
            Err(err) => {
                warn!(
                    op,
                    stage = %stage,
                    outcome = %SwapStage::Rejected,
                    error = %err,
                    "❌ rejected, rolling back {} change(s)",
                    journal.len()
                );
                self.rollback(journal);
                Err(err)
            }
        }
    }

    fn rollback(&mut self, journal: Journal) {
        for undo in journal.unwind() {
            match undo {
                Undo::Reserve { coin, previous } => self.registry.restore_reserve(&coin, previous),
                Undo::Balance { account, coin, previous } => {
                    self.ledger.restore(&account, &coin, previous)
                }
                Undo::NativeCollected { from, amount } => self.vault.refund(&from, amount),
            }
        }
    }

    fn emit(&self, event: ExchangeEvent) -> EventRecord {
        let record = EventRecord::new(event);
        for sink in &self.sinks {
            sink.publish(&record);
        }
        record
    }

    #[allow(clippy::too_many_arguments)]
    fn receipt(
        &self,
        record: EventRecord,
        account: &Address,
        coin: &str,
        side: QuoteSide,
        rate: u128,
        amount_in: Wei,
        amount_out: Wei,
    ) -> SwapReceipt {
        SwapReceipt {
            event_id: record.id,
            account: *account,
            coin: coin.to_string(),
            side,
            rate,
            amount_in,
            amount_out,
            reserve_after: self.registry.get_coin(coin).map(|c| c.reserve).unwrap_or(0),
            balance_after: self.ledger.balance_of(account, coin),
            stage: SwapStage::Done,
            executed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::EventLog;
    use crate::infrastructure::InMemoryVault;
    use crate::shared::utils::parse_ether;

    const ONE_COIN: &str = "1Coin";

    fn engine_with_log() -> (SwapEngine<InMemoryVault>, EventLog) {
        let mut engine = SwapEngine::new(InMemoryVault::new()).unwrap();
        let log = EventLog::new();
        engine.subscribe(Arc::new(log.clone()));
        (engine, log)
    }

    fn funded_account(engine: &mut SwapEngine<InMemoryVault>, ether: &str) -> Address {
        let account = Address::random();
        engine
            .vault_mut()
            .faucet(&account, parse_ether(ether).unwrap())
            .unwrap();
        account
    }

    #[test]
    fn test_constructor_seeds_two_active_coins() {
        let (engine, _) = engine_with_log();
        let coins = engine.coins();
        assert_eq!(coins.len(), 2);
        assert_eq!(coins[0].name, "1Coin");
        assert_eq!(coins[1].name, "FunCoin");
        assert!(coins.iter().all(|c| c.is_active && c.rate == 1500));
        assert_eq!(coins[0].reserve, 1_000_000 * WEI_PER_UNIT);
    }

    #[test]
    fn test_add_coin_emits_event() {
        let (mut engine, log) = engine_with_log();
        let coin = engine.add_coin("Bao", "bbb", 1500).unwrap();
        assert!(coin.is_active);
        assert_eq!(
            log.records()[0].event,
            ExchangeEvent::NewCoinAdded { name: "Bao".to_string() }
        );
    }

    #[test]
    fn test_add_existing_coin_fails_without_event() {
        let (mut engine, log) = engine_with_log();
        let before = engine.snapshot();

        let err = engine.add_coin(ONE_COIN, ONE_COIN, 1500).unwrap_err();
        assert_eq!(err, SwapError::DuplicateCoin(ONE_COIN.to_string()));
        assert_eq!(engine.snapshot(), before);
        assert!(log.is_empty());
    }

    #[test]
    fn test_deactivate_twice_emits_each_time() {
        let (mut engine, log) = engine_with_log();
        engine.deactivate_coin(ONE_COIN).unwrap();
        let coin = engine.deactivate_coin(ONE_COIN).unwrap();
        assert!(!coin.is_active);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_quote_matches_fixed_rate() {
        let (engine, _) = engine_with_log();
        let out = engine.get_eth_to_token(parse_ether("0.05").unwrap(), ONE_COIN).unwrap();
        assert_eq!(out, 75 * WEI_PER_UNIT);
        let back = engine.get_token_to_eth(out, ONE_COIN).unwrap();
        assert_eq!(back, parse_ether("0.05").unwrap());
        assert!(matches!(engine.get_eth_to_token(1, "nope"), Err(SwapError::UnknownCoin(_))));
    }

    #[test]
    fn test_swap_native_to_coin_credits_balance() {
        let (mut engine, log) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1");
        let native_in = parse_ether("0.05").unwrap();

        let receipt = engine.swap_native_to_coin(&exchanger, ONE_COIN, native_in).unwrap();

        let expected = 75 * WEI_PER_UNIT;
        assert_eq!(receipt.amount_out, expected);
        assert_eq!(receipt.stage, SwapStage::Done);
        assert_eq!(engine.get_balance(ONE_COIN, &exchanger).unwrap(), expected);
        assert_eq!(
            engine.get_coin(ONE_COIN).unwrap().reserve,
            1_000_000 * WEI_PER_UNIT - expected
        );
        assert_eq!(engine.vault().treasury(), native_in);
        assert_eq!(engine.vault().balance_of(&exchanger), parse_ether("0.95").unwrap());

        let records = log.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, receipt.event_id);
        assert_eq!(
            records[0].event,
            ExchangeEvent::SwappedNativeToCoin {
                account: exchanger,
                coin: ONE_COIN.to_string(),
                native_in,
                token_out: expected,
            }
        );
    }

    #[test]
    fn test_insufficient_liquidity_refunds_everything() {
        let (mut engine, log) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1000");
        let before = engine.snapshot();

        let err = engine
            .swap_native_to_coin(&exchanger, ONE_COIN, parse_ether("1000").unwrap())
            .unwrap_err();

        assert!(matches!(err, SwapError::InsufficientLiquidity { .. }));
        assert!(err.to_string().contains("There isn't enough coin in the DEX"));
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.vault().balance_of(&exchanger), parse_ether("1000").unwrap());
        assert_eq!(engine.vault().treasury(), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_inactive_and_unknown_coins_rejected_with_refund() {
        let (mut engine, _) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1");
        engine.deactivate_coin(ONE_COIN).unwrap();

        let err = engine.swap_native_to_coin(&exchanger, ONE_COIN, 10).unwrap_err();
        assert_eq!(err, SwapError::CoinInactive(ONE_COIN.to_string()));
        let err = engine.swap_native_to_coin(&exchanger, "Nope", 10).unwrap_err();
        assert_eq!(err, SwapError::UnknownCoin("Nope".to_string()));

        assert_eq!(engine.vault().balance_of(&exchanger), WEI_PER_UNIT);
        assert_eq!(engine.ledger().entry(&exchanger, ONE_COIN), None);
    }

    #[test]
    fn test_coin_lookup_precedes_payment() {
        let (mut engine, _) = engine_with_log();
        let broke = Address::random();

        let err = engine.swap_native_to_coin(&broke, "Nope", 10).unwrap_err();
        assert_eq!(err, SwapError::UnknownCoin("Nope".to_string()));

        engine.deactivate_coin(ONE_COIN).unwrap();
        let err = engine.swap_native_to_coin(&broke, ONE_COIN, 10).unwrap_err();
        assert_eq!(err, SwapError::CoinInactive(ONE_COIN.to_string()));

        assert_eq!(engine.vault().treasury(), 0);
        assert_eq!(engine.vault().balance_of(&broke), 0);
    }

    #[test]
    fn test_coin_to_native_rejects_inactive_and_unknown() {
        let (mut engine, log) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1");
        engine
            .swap_native_to_coin(&exchanger, ONE_COIN, parse_ether("0.05").unwrap())
            .unwrap();
        engine.deactivate_coin(ONE_COIN).unwrap();
        let before = engine.snapshot();
        let treasury = engine.vault().treasury();

        let err = engine
            .swap_coin_to_native(&exchanger, ONE_COIN, WEI_PER_UNIT)
            .unwrap_err();
        assert_eq!(err, SwapError::CoinInactive(ONE_COIN.to_string()));
        let err = engine.swap_coin_to_native(&exchanger, "Nope", 1).unwrap_err();
        assert_eq!(err, SwapError::UnknownCoin("Nope".to_string()));

        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.vault().treasury(), treasury);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_native_shortfall_rejected() {
        let (mut engine, _) = engine_with_log();
        let exchanger = funded_account(&mut engine, "0.01");
        let err = engine
            .swap_native_to_coin(&exchanger, ONE_COIN, parse_ether("0.05").unwrap())
            .unwrap_err();
        assert!(matches!(err, SwapError::NativeTransferFailed(_)));
    }

    #[test]
    fn test_zero_amounts_rejected() {
        let (mut engine, _) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1");
        assert_eq!(
            engine.swap_native_to_coin(&exchanger, ONE_COIN, 0).unwrap_err(),
            SwapError::ZeroAmount
        );
        assert_eq!(
            engine.swap_coin_to_native(&exchanger, ONE_COIN, 0).unwrap_err(),
            SwapError::ZeroAmount
        );
    }

    #[test]
    fn test_round_trip_never_pays_more() {
        let (mut engine, log) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1");
        let native_in = parse_ether("0.05").unwrap();

        engine.swap_native_to_coin(&exchanger, ONE_COIN, native_in).unwrap();
        let tokens = engine.get_balance(ONE_COIN, &exchanger).unwrap();
        let receipt = engine.swap_coin_to_native(&exchanger, ONE_COIN, tokens).unwrap();

        assert!(receipt.amount_out <= native_in);
        assert_eq!(receipt.amount_out, native_in);
        assert_eq!(engine.get_balance(ONE_COIN, &exchanger).unwrap(), 0);
        assert_eq!(
            engine.get_coin(ONE_COIN).unwrap().reserve,
            1_000_000 * WEI_PER_UNIT
        );
        assert_eq!(engine.vault().balance_of(&exchanger), WEI_PER_UNIT);
        assert_eq!(log.records()[1].event.kind(), "SwappedCoinToNative");
    }

    #[test]
    fn test_round_trip_with_dust_loses_remainder() {
        let (mut engine, _) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1");
        engine.swap_native_to_coin(&exchanger, ONE_COIN, 3).unwrap();
        assert_eq!(engine.get_balance(ONE_COIN, &exchanger).unwrap(), 4500);

        // 1499 tokens convert to 0 native
        let receipt = engine.swap_coin_to_native(&exchanger, ONE_COIN, 1499).unwrap();
        assert_eq!(receipt.amount_out, 0);
        let receipt = engine.swap_coin_to_native(&exchanger, ONE_COIN, 3001).unwrap();
        assert_eq!(receipt.amount_out, 2);
        assert!(engine.vault().balance_of(&exchanger) < WEI_PER_UNIT);
    }

    #[test]
    fn test_insufficient_balance_propagates_unchanged() {
        let (mut engine, log) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1");
        engine.swap_native_to_coin(&exchanger, ONE_COIN, 1).unwrap();
        let before = engine.snapshot();

        let err = engine.swap_coin_to_native(&exchanger, ONE_COIN, 1501).unwrap_err();
        assert_eq!(err, SwapError::InsufficientBalance { requested: 1501, available: 1500 });
        assert_eq!(engine.snapshot(), before);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_failed_payout_rolls_back_debit_and_reserve() {
        let (mut engine, log) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1");
        engine
            .swap_native_to_coin(&exchanger, ONE_COIN, parse_ether("0.05").unwrap())
            .unwrap();
        let before = engine.snapshot();
        let treasury = engine.vault().treasury();

        engine.vault_mut().reject_payments_to(&exchanger);
        let tokens = engine.get_balance(ONE_COIN, &exchanger).unwrap();
        let err = engine.swap_coin_to_native(&exchanger, ONE_COIN, tokens).unwrap_err();

        assert!(matches!(err, SwapError::NativeTransferFailed(_)));
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.vault().treasury(), treasury);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_treasury_shortfall_rejected_at_liquidity_check() {
        let (mut engine, _) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1");
        engine.swap_native_to_coin(&exchanger, ONE_COIN, 10).unwrap();

        // drain the treasury to another account
        let other = Address::random();
        let treasury = engine.vault().treasury();
        engine.vault_mut().pay(&other, treasury).unwrap();

        let before = engine.snapshot();
        let err = engine.swap_coin_to_native(&exchanger, ONE_COIN, 15_000).unwrap_err();
        assert!(matches!(err, SwapError::NativeTransferFailed(_)));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_supply_is_conserved_across_swaps() {
        let (mut engine, _) = engine_with_log();
        let accounts: Vec<Address> = (0..4).map(|_| funded_account(&mut engine, "10")).collect();

        for (i, account) in accounts.iter().enumerate() {
            engine
                .swap_native_to_coin(account, ONE_COIN, (i as u128 + 1) * 1_000_000)
                .unwrap();
        }
        engine.swap_coin_to_native(&accounts[2], ONE_COIN, 7_777).unwrap();

        let coin = engine.get_coin(ONE_COIN).unwrap();
        assert_eq!(coin.reserve + engine.ledger().total_of(ONE_COIN), coin.supply);
    }

    #[test]
    fn test_snapshot_restores_engine() {
        let (mut engine, _) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1");
        engine.swap_native_to_coin(&exchanger, ONE_COIN, 42).unwrap();

        let restored = SwapEngine::from_snapshot(engine.snapshot(), engine.vault().clone());
        assert_eq!(restored.get_balance(ONE_COIN, &exchanger).unwrap(), 42 * 1500);
        assert_eq!(restored.snapshot(), engine.snapshot());
    }

    #[test]
    fn test_get_balance_unknown_coin() {
        let (engine, _) = engine_with_log();
        assert!(matches!(
            engine.get_balance("Nope", &Address::random()),
            Err(SwapError::UnknownCoin(_))
        ));
        assert_eq!(engine.get_balance(ONE_COIN, &Address::random()).unwrap(), 0);
    }

    #[test]
    fn test_fund_reserve_enables_new_coin() {
        let (mut engine, log) = engine_with_log();
        let exchanger = funded_account(&mut engine, "1");
        engine.add_coin("Bao", "bbb", 10).unwrap();

        assert!(matches!(
            engine.swap_native_to_coin(&exchanger, "Bao", 5),
            Err(SwapError::InsufficientLiquidity { requested: 50, reserve: 0 })
        ));

        engine.fund_reserve("Bao", 100).unwrap();
        let receipt = engine.swap_native_to_coin(&exchanger, "Bao", 5).unwrap();
        assert_eq!(receipt.reserve_after, 50);
        assert_eq!(
            log.records().iter().map(|r| r.event.kind()).collect::<Vec<_>>(),
            vec!["NewCoinAdded", "ReserveFunded", "SwappedNativeToCoin"]
        );
    }
}
