//! Key-value persistence
//!
//! The journal keeps two independent string values (the trade list and the
//! account balance) in a flat key-value substrate. Backends implement
//! [`KeyValueStore`]; [`open_backend`] picks one from configuration.

pub mod file;
pub mod memory;
pub mod redis;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

use crate::error::StorageError;
use crate::Result;
use shared::{Config, StorageBackend};

/// Flat string key-value substrate
pub trait KeyValueStore {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;

    /// Overwrite a value
    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StorageError>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Open the backend selected by `config`
pub fn open_backend(config: &Config) -> Result<Box<dyn KeyValueStore>> {
    let backend: Box<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => Box::new(MemoryStore::new()),
        StorageBackend::File => Box::new(FileStore::new(&config.storage_dir)),
        StorageBackend::Redis => Box::new(RedisStore::open(&config.redis_url)?),
    };

    tracing::info!("Using {} storage backend", backend.name());
    Ok(backend)
}
