//! Native currency custody interface

use crate::shared::errors::TransferError;
use crate::shared::types::{Address, Wei};

/// External collaborator that moves native currency in and out of the
/// exchange treasury.
pub trait NativeVault: Send + Sync {
    /// Take an attached payment from `from` into the treasury
    fn collect(&mut self, from: &Address, amount: Wei) -> Result<(), TransferError>;

    /// Undo a previous `collect`. Must not fail for an amount just collected.
    fn refund(&mut self, to: &Address, amount: Wei);

    /// Pay `amount` out of the treasury to `to`
    fn pay(&mut self, to: &Address, amount: Wei) -> Result<(), TransferError>;

    /// Native currency held by the exchange
    fn treasury(&self) -> Wei;
}
