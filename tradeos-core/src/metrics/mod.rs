//! Performance metrics module

pub mod analytics;
pub mod engine;
pub mod report;

pub use analytics::*;
pub use engine::*;
pub use report::*;
