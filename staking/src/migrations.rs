//! Store migrations between staking consensus versions.

use crate::error::StakingError;
use crate::keeper::BaseKeeper;
use crate::keys;
use crate::params::Params;
use centauri_store::Subspace;
use centauri_types::modules::staking::KEY_MIN_COMMISSION_RATE;
use centauri_types::Dec;

/// Runs the in-place store migrations of the staking module.
#[derive(Clone)]
pub struct Migrator {
    keeper: BaseKeeper,
    subspace: Subspace,
}

impl Migrator {
    pub fn new(keeper: BaseKeeper, subspace: Subspace) -> Self {
        Self { keeper, subspace }
    }

    /// Version 1 → 2: length-prefix the addresses inside validator,
    /// delegation and unbonding-delegation keys.
    ///
    /// Every key is rewritten in memory first; the store is only touched once
    /// all of them converted, so a corrupt key leaves it at version 1.
    pub fn migrate_1_to_2(&self) -> Result<(), StakingError> {
        let store = self.keeper.store();
        let mut rewrites = Vec::new();
        for &(prefix, address_count) in keys::ADDRESS_KEYED_PREFIXES {
            for pair in store.iter_prefix(&[prefix])? {
                let new_key = keys::migrate_legacy_key(&pair.key, address_count)?;
                rewrites.push((pair.key, new_key, pair.value));
            }
        }
        for (old_key, _, _) in &rewrites {
            store.delete(old_key)?;
        }
        for (_, new_key, value) in &rewrites {
            store.set(new_key, value)?;
        }
        tracing::info!(moved = rewrites.len(), "migrated x/staking store from version 1 to 2");
        Ok(())
    }

    /// Version 2 → 3: introduce the minimum commission rate param, defaulting to zero.
    pub fn migrate_2_to_3(&self) -> Result<(), StakingError> {
        if !self.subspace.has(KEY_MIN_COMMISSION_RATE)? {
            self.subspace.set(KEY_MIN_COMMISSION_RATE, &Dec::ZERO)?;
        }
        tracing::info!("migrated x/staking store from version 2 to 3");
        Ok(())
    }

    /// Version 3 → 4: move params out of the legacy subspace into the module store.
    pub fn migrate_3_to_4(&self) -> Result<(), StakingError> {
        let params = Params::from_subspace(&self.subspace)?;
        self.keeper.set_params(&params)?;
        tracing::info!(
            bond_denom = %params.bond_denom,
            "migrated x/staking store from version 3 to 4"
        );
        Ok(())
    }
}
