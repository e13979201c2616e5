//! Staking module parameters.

use crate::error::StakingError;
use centauri_store::Subspace;
use centauri_types::modules::staking::{
    KEY_BOND_DENOM, KEY_HISTORICAL_ENTRIES, KEY_MAX_ENTRIES, KEY_MAX_VALIDATORS,
    KEY_MIN_COMMISSION_RATE, KEY_UNBONDING_TIME,
};
use centauri_types::{Coin, Dec};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Time a delegation takes to unbond, in seconds.
    pub unbonding_time_secs: u64,
    /// Size of the active validator set.
    pub max_validators: u32,
    /// Max unbonding entries per delegator/validator pair.
    pub max_entries: u32,
    pub historical_entries: u32,
    pub bond_denom: String,
    pub min_commission_rate: Dec,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            unbonding_time_secs: 21 * 24 * 3600, // 3 weeks
            max_validators: 100,
            max_entries: 7,
            historical_entries: 10_000,
            bond_denom: "ppica".to_string(),
            min_commission_rate: Dec::ZERO,
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<(), StakingError> {
        if self.unbonding_time_secs == 0 {
            return Err(StakingError::InvalidParams(
                "unbonding time must be positive".into(),
            ));
        }
        if self.max_validators == 0 {
            return Err(StakingError::InvalidParams(
                "max validators must be positive".into(),
            ));
        }
        if self.max_entries == 0 {
            return Err(StakingError::InvalidParams(
                "max entries must be positive".into(),
            ));
        }
        Coin::new(self.bond_denom.clone(), 0)
            .validate()
            .map_err(|e| StakingError::InvalidParams(e.to_string()))?;
        if self.min_commission_rate > Dec::ONE {
            return Err(StakingError::InvalidParams(format!(
                "minimum commission rate {} is above 1",
                self.min_commission_rate
            )));
        }
        Ok(())
    }

    /// Read every parameter from the legacy subspace.
    pub fn from_subspace(subspace: &Subspace) -> Result<Self, StakingError> {
        Ok(Self {
            unbonding_time_secs: subspace.must_get(KEY_UNBONDING_TIME)?,
            max_validators: subspace.must_get(KEY_MAX_VALIDATORS)?,
            max_entries: subspace.must_get(KEY_MAX_ENTRIES)?,
            historical_entries: subspace.must_get(KEY_HISTORICAL_ENTRIES)?,
            bond_denom: subspace.must_get(KEY_BOND_DENOM)?,
            min_commission_rate: subspace.must_get(KEY_MIN_COMMISSION_RATE)?,
        })
    }

    /// Write every parameter to the legacy subspace.
    pub fn to_subspace(&self, subspace: &Subspace) -> Result<(), StakingError> {
        subspace.set(KEY_UNBONDING_TIME, &self.unbonding_time_secs)?;
        subspace.set(KEY_MAX_VALIDATORS, &self.max_validators)?;
        subspace.set(KEY_MAX_ENTRIES, &self.max_entries)?;
        subspace.set(KEY_HISTORICAL_ENTRIES, &self.historical_entries)?;
        subspace.set(KEY_BOND_DENOM, &self.bond_denom)?;
        subspace.set(KEY_MIN_COMMISSION_RATE, &self.min_commission_rate)?;
        Ok(())
    }
}
