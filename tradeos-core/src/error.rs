//! Journal error types

use crate::journal::TradeStatus;
use thiserror::Error;

/// Input rejected by the trade store. A rejected operation leaves the
/// journal untouched and performs no write.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("entry price must be a positive number, got {0}")]
    NonPositiveEntryPrice(f64),
    #[error("exit price must be zero (open) or a positive number, got {0}")]
    InvalidExitPrice(f64),
    #[error("quantity must be a positive number, got {0}")]
    NonPositiveQuantity(f64),
    #[error("pnl and pnl percent must be finite numbers, got {pnl} and {pnl_percent}")]
    NonFinitePnl { pnl: f64, pnl_percent: f64 },
    #[error("status {status} does not match exit price {exit_price} and pnl {pnl}")]
    InconsistentStatus {
        status: TradeStatus,
        exit_price: f64,
        pnl: f64,
    },
    #[error("a trade with id {0:?} already exists")]
    DuplicateId(String),
    #[error("account balance must be a finite, non-negative number, got {0}")]
    InvalidBalance(f64),
}

/// Failure reported by a key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
}
