//! Message and query server traits.

use crate::ModuleError;
use centauri_types::Msg;
use serde::{Deserialize, Serialize};

/// Result of handling one message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgResponse {
    /// Key/value attributes describing what the handler did, in emission order.
    pub events: Vec<(String, String)>,
}

impl MsgResponse {
    pub fn with_event(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.events.push((key.into(), value.into()));
        self
    }
}

/// Handles the transaction messages owned by one module.
pub trait MsgServer: Send + Sync {
    /// Handle `msg`. Messages owned by other modules yield
    /// [`ModuleError::UnhandledMessage`].
    fn handle(&self, msg: &Msg) -> Result<MsgResponse, ModuleError>;
}

/// Answers read-only queries for one module.
///
/// `path` is the module-relative query path (e.g. `params`); the result is
/// JSON-encoded.
pub trait QueryServer: Send + Sync {
    fn query(&self, path: &str) -> Result<Vec<u8>, ModuleError>;
}
