//! Infrastructure layer - adapters for custody, events and persistence

pub mod event_bus;
pub mod native_vault;
pub mod state_store;

pub use event_bus::BroadcastSink;
pub use native_vault::InMemoryVault;
pub use state_store::{JsonStateStore, PersistedState};
