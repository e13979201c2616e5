//! Legacy parameter subspace: a per-module namespace of JSON-encoded params.

use crate::{KvStore, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Parameters of one module, stored as `<name>/<key> → JSON value`.
#[derive(Clone)]
pub struct Subspace {
    name: String,
    store: Arc<dyn KvStore>,
}

impl Subspace {
    pub fn new(name: impl Into<String>, store: Arc<dyn KvStore>) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn full_key(&self, key: &str) -> Vec<u8> {
        format!("{}/{}", self.name, key).into_bytes()
    }

    pub fn has(&self, key: &str) -> Result<bool, StoreError> {
        self.store.has(&self.full_key(key))
    }

    /// Decode the parameter stored under `key`; `None` if it was never set.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(&self.full_key(key))? {
            Some(raw) => serde_json::from_slice(&raw)
                .map(Some)
                .map_err(|e| StoreError::Serialization(format!("{}/{key}: {e}", self.name))),
            None => Ok(None),
        }
    }

    /// Like [`Subspace::get`] but a missing parameter is an error.
    pub fn must_get<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        self.get(key)?
            .ok_or_else(|| StoreError::NotFound(format!("{}/{key}", self.name)))
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_vec(value)
            .map_err(|e| StoreError::Serialization(format!("{}/{key}: {e}", self.name)))?;
        self.store.set(&self.full_key(key), &raw)
    }
}
