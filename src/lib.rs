//! Coinswap - fixed-rate native <-> coin exchange
//! Built with Domain-Driven Design principles

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;

// Re-export main types for convenience
pub use domain::swap::SwapEngine;
pub use domain::registry::CoinRegistry;
pub use domain::ledger::BalanceLedger;
pub use domain::pricing::PricingEngine;
pub use application::ExchangeService;
