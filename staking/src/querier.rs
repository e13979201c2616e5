//! Staking query server.

use crate::keeper::Keeper;
use centauri_module::{ModuleError, QueryServer};
use serde::Serialize;

/// Answers `params`, `validator/<operator>`, `delegation/<delegator>/<validator>`
/// and `pending_delegations`.
#[derive(Clone)]
pub struct Querier {
    keeper: Keeper,
}

impl Querier {
    pub fn new(keeper: Keeper) -> Self {
        Self { keeper }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>, ModuleError> {
    serde_json::to_vec(value).map_err(|e| ModuleError::Other(e.to_string()))
}

impl QueryServer for Querier {
    fn query(&self, path: &str) -> Result<Vec<u8>, ModuleError> {
        let parts: Vec<&str> = path.split('/').collect();
        match parts.as_slice() {
            ["params"] => to_json(&self.keeper.keeper.params()?),
            ["validator", operator] => to_json(&self.keeper.keeper.validator(operator)?),
            ["delegation", delegator, validator] => {
                to_json(&self.keeper.keeper.delegation(delegator, validator)?.to_string())
            }
            ["pending_delegations"] => to_json(&self.keeper.pending_delegations()?),
            _ => Err(ModuleError::UnknownQuery(path.to_string())),
        }
    }
}
