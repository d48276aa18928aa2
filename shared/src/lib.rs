pub mod config;

pub use crate::config::{Config, StorageBackend};
