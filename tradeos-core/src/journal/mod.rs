//! Journal module
//!
//! Trade records, the entry-form draft and its P&L derivation, the account
//! balance and the built-in sample data.

pub mod balance;
pub mod draft;
pub mod filter;
pub mod pnl;
pub mod sample;
pub mod trade;
pub mod validator;

pub use balance::*;
pub use draft::*;
pub use filter::*;
pub use pnl::*;
pub use sample::*;
pub use trade::*;
pub use validator::*;
