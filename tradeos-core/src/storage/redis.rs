//! Redis-backed key-value storage

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use ::redis::{Client, Commands};
use tracing::info;

/// Stores values as plain redis strings. A connection is opened per call;
/// the journal writes rarely and never concurrently.
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    /// Open a client for `redis_url`. Only the URL is checked here; the
    /// server is first contacted on the initial read.
    pub fn open(redis_url: &str) -> Result<Self, StorageError> {
        let client = Client::open(redis_url)?;
        info!("Opened redis client for {}", redis_url);
        Ok(Self::new(client))
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl KeyValueStore for RedisStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.client.get_connection()?;
        let value: Option<String> = conn.get(key)?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.client.get_connection()?;
        conn.set::<_, _, ()>(key, value)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
