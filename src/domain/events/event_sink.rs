//! Event sink implementations

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

use super::EventRecord;

/// Observer of committed exchange events
pub trait EventSink: Send + Sync {
    fn publish(&self, record: &EventRecord);
}

/// In-memory event log. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    records: Arc<Mutex<Vec<EventRecord>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<EventRecord> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Recovers a poisoned lock; records are never dropped
    fn lock(&self) -> MutexGuard<'_, Vec<EventRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| {
            warn!("event log lock poisoned, recovering records");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl EventSink for EventLog {
    fn publish(&self, record: &EventRecord) {
        self.lock().push(record.clone());
    }
}

/// Logs every event through `tracing`
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn publish(&self, record: &EventRecord) {
        info!(
            event_id = %record.id,
            kind = record.event.kind(),
            coin = record.event.coin(),
            "📣 {}",
            record.event
        );
    }
}
