//! In-memory key-value storage

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use std::collections::HashMap;

/// Process-local storage; contents are lost on drop
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    /// Successful `set` calls
    writes: usize,
}

impl MemoryStore {
    /// Create new storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-populated with `values`
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            writes: 0,
        }
    }

    /// Number of writes performed since creation
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Get number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage() {
        let mut storage = MemoryStore::new();
        assert!(storage.is_empty());
        assert_eq!(storage.get("tradeos_balance").unwrap(), None);

        storage.set("tradeos_balance", "10000").unwrap();
        storage.set("tradeos_balance", "12000").unwrap();
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get("tradeos_balance").unwrap().as_deref(), Some("12000"));
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn test_prepopulated_storage_counts_no_writes() {
        let storage = MemoryStore::with_values([("tradeos_trades", "[]")]);
        assert_eq!(storage.get("tradeos_trades").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.write_count(), 0);
    }
}
