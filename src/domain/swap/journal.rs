//! Undo journal used as the rollback point of every mutating operation

use crate::shared::types::{Address, Wei};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Undo {
    Reserve {
        coin: String,
        previous: Wei,
    },
    Balance {
        account: Address,
        coin: String,
        previous: Option<Wei>,
    },
    NativeCollected {
        from: Address,
        amount: Wei,
    },
}

#[derive(Debug, Default)]
pub(crate) struct Journal {
    entries: Vec<Undo>,
}

impl Journal {
    pub fn record(&mut self, undo: Undo) {
        self.entries.push(undo);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in the order they must be undone (newest first)
    pub fn unwind(self) -> impl Iterator<Item = Undo> {
        self.entries.into_iter().rev()
    }
}
