//! Broadcast fan-out of committed exchange events

use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::events::{EventRecord, EventSink};

const DEFAULT_CAPACITY: usize = 256;

/// Publishes every record to async subscribers over a broadcast channel.
/// Records published with no live receiver are dropped.
#[derive(Debug, Clone)]
pub struct BroadcastSink {
    sender: broadcast::Sender<EventRecord>,
}

impl BroadcastSink {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EventRecord> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for BroadcastSink {
    fn publish(&self, record: &EventRecord) {
        if self.sender.send(record.clone()).is_err() {
            debug!(kind = record.event.kind(), "no event subscribers");
        }
    }
}
