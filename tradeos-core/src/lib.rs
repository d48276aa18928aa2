//! TradeOS core: the logic behind a personal trading journal
//!
//! This crate is a plain library that any front end can call into:
//!
//! - **Journal**: trade records, entry-form drafts and P&L derivation
//! - **Store**: the single owner of the journal, written through to a
//!   key-value backend after every change
//! - **Metrics**: win rate, profit factor, total P&L and win streak,
//!   recomputed on demand, plus analytics views and a text report
//! - **Storage**: in-memory, directory and redis backends
//!
//! # Example
//!
//! ```no_run
//! use tradeos_core::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = shared::Config::from_env()?;
//!     let mut store = TradeStore::from_config(&config)?;
//!
//!     store.record_trade(
//!         TradeDraft::new("BTC/USDT", Direction::Long, 42000.0).closed_at(43500.0),
//!     )?;
//!     println!("{}", store.report().format());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod journal;
pub mod metrics;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub mod prelude {
    pub use crate::error::*;
    pub use crate::journal::*;
    pub use crate::metrics::*;
    pub use crate::storage::*;
    pub use crate::store::*;

    pub use anyhow::{Context, Result};
}

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
