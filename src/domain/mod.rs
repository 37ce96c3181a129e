//! Domain layer - core business logic and entities

pub mod events;
pub mod ledger;
pub mod pricing;
pub mod registry;
pub mod swap;
