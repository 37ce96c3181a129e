//! Events domain - notifications emitted after each committed change

mod event_sink;

pub use event_sink::{EventLog, EventSink, TracingSink};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::shared::types::{Address, Wei};
use crate::shared::utils::generate_id;

/// State change notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeEvent {
    NewCoinAdded {
        name: String,
    },
    CoinDeactivated {
        name: String,
    },
    ReserveFunded {
        name: String,
        amount: Wei,
    },
    SwappedNativeToCoin {
        account: Address,
        coin: String,
        native_in: Wei,
        token_out: Wei,
    },
    SwappedCoinToNative {
        account: Address,
        coin: String,
        token_in: Wei,
        native_out: Wei,
    },
}

impl ExchangeEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            ExchangeEvent::NewCoinAdded { .. } => "NewCoinAdded",
            ExchangeEvent::CoinDeactivated { .. } => "CoinDeactivated",
            ExchangeEvent::ReserveFunded { .. } => "ReserveFunded",
            ExchangeEvent::SwappedNativeToCoin { .. } => "SwappedNativeToCoin",
            ExchangeEvent::SwappedCoinToNative { .. } => "SwappedCoinToNative",
        }
    }

    /// Coin the event concerns
    pub fn coin(&self) -> &str {
        match self {
            ExchangeEvent::NewCoinAdded { name }
            | ExchangeEvent::CoinDeactivated { name }
            | ExchangeEvent::ReserveFunded { name, .. } => name,
            ExchangeEvent::SwappedNativeToCoin { coin, .. }
            | ExchangeEvent::SwappedCoinToNative { coin, .. } => coin,
        }
    }
}

impl fmt::Display for ExchangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeEvent::NewCoinAdded { name } => write!(f, "NewCoinAdded({})", name),
            ExchangeEvent::CoinDeactivated { name } => write!(f, "CoinDeactivated({})", name),
            ExchangeEvent::ReserveFunded { name, amount } => {
                write!(f, "ReserveFunded({}, {})", name, amount)
            }
            ExchangeEvent::SwappedNativeToCoin { account, coin, native_in, token_out } => write!(
                f,
                "SwappedNativeToCoin({}, {}, {}, {})",
                account, coin, native_in, token_out
            ),
            ExchangeEvent::SwappedCoinToNative { account, coin, token_in, native_out } => write!(
                f,
                "SwappedCoinToNative({}, {}, {}, {})",
                account, coin, token_in, native_out
            ),
        }
    }
}

/// Emitted event envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub emitted_at: DateTime<Utc>,
    pub event: ExchangeEvent,
}

impl EventRecord {
    pub fn new(event: ExchangeEvent) -> Self {
        Self {
            id: generate_id(),
            emitted_at: Utc::now(),
            event,
        }
    }
}
