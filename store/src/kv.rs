//! Raw key-value store trait.

use crate::StoreError;
use serde::{Deserialize, Serialize};

/// A raw store entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvPair {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl KvPair {
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// First byte of the key, which selects the record type in module stores.
    pub fn prefix(&self) -> Option<u8> {
        self.key.first().copied()
    }
}

/// Trait for a module's key-value store.
///
/// Methods take `&self`; implementations provide their own interior
/// synchronization so a store can be shared between a keeper and its
/// migrator.
pub trait KvStore: Send + Sync {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &[u8]) -> Result<(), StoreError>;

    /// All entries whose key starts with `prefix`, in ascending key order.
    fn iter_prefix(&self, prefix: &[u8]) -> Result<Vec<KvPair>, StoreError>;

    fn has(&self, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}
