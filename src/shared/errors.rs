//! Error handling for the exchange

use thiserror::Error;

/// Swap and registry errors.
///
/// Every variant aborts the whole operation; the engine rolls back any
/// partial change before returning it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("Coin already exists: {0}")]
    DuplicateCoin(String),

    #[error("Unknown coin: {0}")]
    UnknownCoin(String),

    #[error("Coin is not active: {0}")]
    CoinInactive(String),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u128, available: u128 },

    #[error("There isn't enough coin in the DEX: requested {requested}, reserve {reserve}")]
    InsufficientLiquidity { requested: u128, reserve: u128 },

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid rate for coin {0}: rate must be positive")]
    InvalidRate(String),

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Native transfer failed: {0}")]
    NativeTransferFailed(String),
}

/// Native currency transfer errors raised by a vault
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Insufficient native funds for {account}: requested {requested}, available {available}")]
    InsufficientFunds {
        account: String,
        requested: u128,
        available: u128,
    },

    #[error("Insufficient treasury: requested {requested}, available {available}")]
    InsufficientTreasury { requested: u128, available: u128 },

    #[error("Recipient rejected transfer: {0}")]
    RecipientRejected(String),

    #[error("Native balance overflow")]
    Overflow,
}

impl From<TransferError> for SwapError {
    fn from(err: TransferError) -> Self {
        SwapError::NativeTransferFailed(err.to_string())
    }
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Unauthorized: {0} is not the operator")]
    Unauthorized(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Swap rejected: {0}")]
    Swap(#[from] SwapError),
}

impl From<TransferError> for AppError {
    fn from(err: TransferError) -> Self {
        AppError::Swap(err.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}
