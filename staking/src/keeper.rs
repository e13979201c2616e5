//! Staking keepers.
//!
//! [`BaseKeeper`] is the default staking state access: params, validators,
//! delegations and unbonding entries. [`Keeper`] is the app's custom keeper;
//! it embeds the base keeper and adds the pending-delegation buffer that the
//! custom message server writes to.

use crate::error::StakingError;
use crate::keys;
use crate::params::Params;
use centauri_store::KvStore;
use centauri_types::{Coin, Dec};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub operator: String,
    pub commission_rate: Dec,
    /// Total delegated tokens, in bond-denom base units.
    pub tokens: u128,
}

/// A delegation accepted by the custom message server, waiting for the epoch boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDelegation {
    pub delegator: String,
    pub validator: String,
    pub amount: Coin,
}

#[derive(Clone)]
pub struct BaseKeeper {
    store: Arc<dyn KvStore>,
    authority: String,
}

impl BaseKeeper {
    /// `authority` is the only signer allowed to update params (the governance account).
    pub fn new(store: Arc<dyn KvStore>, authority: impl Into<String>) -> Self {
        Self {
            store,
            authority: authority.into(),
        }
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub(crate) fn store(&self) -> &Arc<dyn KvStore> {
        &self.store
    }

    pub fn params(&self) -> Result<Params, StakingError> {
        let raw = self
            .store
            .get(&[keys::PARAMS_KEY])?
            .ok_or_else(|| centauri_store::StoreError::NotFound("staking params".into()))?;
        Ok(bincode::deserialize(&raw)?)
    }

    pub fn set_params(&self, params: &Params) -> Result<(), StakingError> {
        params.validate()?;
        self.store
            .set(&[keys::PARAMS_KEY], &bincode::serialize(params)?)?;
        Ok(())
    }

    pub fn validator(&self, operator: &str) -> Result<Option<Validator>, StakingError> {
        match self.store.get(&keys::validator_key(operator)?)? {
            Some(raw) => Ok(Some(bincode::deserialize(&raw)?)),
            None => Ok(None),
        }
    }

    fn set_validator(&self, validator: &Validator) -> Result<(), StakingError> {
        self.store.set(
            &keys::validator_key(&validator.operator)?,
            &bincode::serialize(validator)?,
        )?;
        Ok(())
    }

    pub fn create_validator(
        &self,
        operator: &str,
        commission_rate: Dec,
    ) -> Result<Validator, StakingError> {
        if self.validator(operator)?.is_some() {
            return Err(StakingError::ValidatorExists(operator.to_string()));
        }
        self.check_commission(commission_rate)?;
        let validator = Validator {
            operator: operator.to_string(),
            commission_rate,
            tokens: 0,
        };
        self.set_validator(&validator)?;
        Ok(validator)
    }

    pub fn edit_validator(
        &self,
        operator: &str,
        commission_rate: Option<Dec>,
    ) -> Result<Validator, StakingError> {
        let mut validator = self.must_get_validator(operator)?;
        if let Some(rate) = commission_rate {
            self.check_commission(rate)?;
            validator.commission_rate = rate;
            self.set_validator(&validator)?;
        }
        Ok(validator)
    }

    fn check_commission(&self, rate: Dec) -> Result<(), StakingError> {
        if rate > Dec::ONE {
            return Err(StakingError::CommissionTooHigh(rate.to_string()));
        }
        let min = self.params()?.min_commission_rate;
        if rate < min {
            return Err(StakingError::CommissionTooLow {
                rate: rate.to_string(),
                min: min.to_string(),
            });
        }
        Ok(())
    }

    fn must_get_validator(&self, operator: &str) -> Result<Validator, StakingError> {
        self.validator(operator)?
            .ok_or_else(|| StakingError::ValidatorNotFound(operator.to_string()))
    }

    /// Amount `delegator` has bonded to `validator`; zero if none.
    pub fn delegation(&self, delegator: &str, validator: &str) -> Result<u128, StakingError> {
        match self.store.get(&keys::delegation_key(delegator, validator)?)? {
            Some(raw) => Ok(bincode::deserialize(&raw)?),
            None => Ok(0),
        }
    }

    fn set_delegation(
        &self,
        delegator: &str,
        validator: &str,
        amount: u128,
    ) -> Result<(), StakingError> {
        let key = keys::delegation_key(delegator, validator)?;
        if amount == 0 {
            self.store.delete(&key)?;
        } else {
            self.store.set(&key, &bincode::serialize(&amount)?)?;
        }
        Ok(())
    }

    /// Unbonding entries (amounts) for a delegator/validator pair, oldest first.
    pub fn unbonding_entries(
        &self,
        delegator: &str,
        validator: &str,
    ) -> Result<Vec<u128>, StakingError> {
        match self
            .store
            .get(&keys::unbonding_delegation_key(delegator, validator)?)?
        {
            Some(raw) => Ok(bincode::deserialize(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Check that `amount` is a positive amount of the bond denom.
    pub fn check_bond_amount(&self, amount: &Coin) -> Result<(), StakingError> {
        let params = self.params()?;
        if amount.denom != params.bond_denom {
            return Err(StakingError::InvalidDenom {
                got: amount.denom.clone(),
                expected: params.bond_denom,
            });
        }
        if amount.is_zero() {
            return Err(StakingError::ZeroAmount);
        }
        Ok(())
    }

    pub fn delegate(
        &self,
        delegator: &str,
        validator: &str,
        amount: &Coin,
    ) -> Result<u128, StakingError> {
        self.check_bond_amount(amount)?;
        let (bonded, val) = self.bonded_after(delegator, validator, amount.amount)?;
        self.set_delegation(delegator, validator, bonded)?;
        self.set_validator(&val)?;
        tracing::debug!(%delegator, %validator, amount = %amount, "delegated");
        Ok(bonded)
    }

    /// Delegation and validator totals after bonding `amount` more, without writing them.
    fn bonded_after(
        &self,
        delegator: &str,
        validator: &str,
        amount: u128,
    ) -> Result<(u128, Validator), StakingError> {
        let mut val = self.must_get_validator(validator)?;
        let have = self.delegation(delegator, validator)?;
        let bonded = have
            .checked_add(amount)
            .ok_or(StakingError::AmountOverflow {
                what: "delegation",
                have,
                add: amount,
            })?;
        val.tokens = val
            .tokens
            .checked_add(amount)
            .ok_or(StakingError::AmountOverflow {
                what: "validator tokens",
                have: val.tokens,
                add: amount,
            })?;
        Ok((bonded, val))
    }

    /// Move `amount` from the bonded delegation into a new unbonding entry.
    pub fn undelegate(
        &self,
        delegator: &str,
        validator: &str,
        amount: &Coin,
    ) -> Result<u128, StakingError> {
        self.check_bond_amount(amount)?;
        let params = self.params()?;
        let mut entries = self.unbonding_entries(delegator, validator)?;
        if entries.len() >= params.max_entries as usize {
            return Err(StakingError::TooManyUnbondingEntries {
                delegator: delegator.to_string(),
                validator: validator.to_string(),
                max: params.max_entries,
            });
        }
        let remaining = self.remove_bond(delegator, validator, amount.amount)?;
        entries.push(amount.amount);
        self.store.set(
            &keys::unbonding_delegation_key(delegator, validator)?,
            &bincode::serialize(&entries)?,
        )?;
        tracing::debug!(%delegator, %validator, amount = %amount, "undelegated");
        Ok(remaining)
    }

    pub fn begin_redelegate(
        &self,
        delegator: &str,
        src_validator: &str,
        dst_validator: &str,
        amount: &Coin,
    ) -> Result<u128, StakingError> {
        self.check_bond_amount(amount)?;
        // Checked before the source bond is touched.
        if src_validator != dst_validator {
            self.bonded_after(delegator, dst_validator, amount.amount)?;
        }
        self.remove_bond(delegator, src_validator, amount.amount)?;
        self.delegate(delegator, dst_validator, amount)
    }

    fn remove_bond(
        &self,
        delegator: &str,
        validator: &str,
        amount: u128,
    ) -> Result<u128, StakingError> {
        let bonded = self.delegation(delegator, validator)?;
        if bonded == 0 {
            return Err(StakingError::DelegationNotFound {
                delegator: delegator.to_string(),
                validator: validator.to_string(),
            });
        }
        if bonded < amount {
            return Err(StakingError::InsufficientDelegation {
                have: bonded,
                need: amount,
            });
        }
        let mut val = self.must_get_validator(validator)?;
        val.tokens = val.tokens.saturating_sub(amount);
        self.set_validator(&val)?;
        self.set_delegation(delegator, validator, bonded - amount)?;
        Ok(bonded - amount)
    }
}

/// The app's staking keeper: the base keeper plus the pending-delegation buffer.
#[derive(Clone)]
pub struct Keeper {
    pub keeper: BaseKeeper,
}

impl Keeper {
    pub fn new(keeper: BaseKeeper) -> Self {
        Self { keeper }
    }

    /// Queue a delegation for the next epoch boundary. Returns its sequence number.
    pub fn buffer_delegation(
        &self,
        delegator: &str,
        validator: &str,
        amount: &Coin,
    ) -> Result<u64, StakingError> {
        self.keeper.check_bond_amount(amount)?;
        keys::delegation_key(delegator, validator)?;
        if self.keeper.validator(validator)?.is_none() {
            return Err(StakingError::ValidatorNotFound(validator.to_string()));
        }

        let store = self.keeper.store();
        let seq = match store.iter_prefix(&[keys::PENDING_DELEGATION_KEY])?.last() {
            Some(last) => decode_seq(&last.key)? + 1,
            None => 0,
        };
        let pending = PendingDelegation {
            delegator: delegator.to_string(),
            validator: validator.to_string(),
            amount: amount.clone(),
        };
        store.set(
            &keys::pending_delegation_key(seq),
            &bincode::serialize(&pending)?,
        )?;
        tracing::debug!(seq, %delegator, %validator, "buffered delegation");
        Ok(seq)
    }

    /// Buffered delegations in submission order.
    pub fn pending_delegations(&self) -> Result<Vec<PendingDelegation>, StakingError> {
        self.keeper
            .store()
            .iter_prefix(&[keys::PENDING_DELEGATION_KEY])?
            .into_iter()
            .map(|pair| bincode::deserialize(&pair.value).map_err(StakingError::from))
            .collect()
    }

    /// Apply every buffered delegation through the base keeper and clear the buffer.
    ///
    /// An entry that no longer applies (e.g. its validator is gone) is dropped
    /// with a warning. Returns the number of delegations applied.
    pub fn apply_pending_delegations(&self) -> Result<usize, StakingError> {
        let store = self.keeper.store();
        let mut applied = 0;
        for pair in store.iter_prefix(&[keys::PENDING_DELEGATION_KEY])? {
            let pending: PendingDelegation = bincode::deserialize(&pair.value)?;
            match self
                .keeper
                .delegate(&pending.delegator, &pending.validator, &pending.amount)
            {
                Ok(_) => applied += 1,
                Err(e) => tracing::warn!(
                    delegator = %pending.delegator,
                    validator = %pending.validator,
                    error = %e,
                    "dropping pending delegation"
                ),
            }
            store.delete(&pair.key)?;
        }
        if applied > 0 {
            tracing::info!(applied, "applied pending delegations");
        }
        Ok(applied)
    }
}

fn decode_seq(key: &[u8]) -> Result<u64, StakingError> {
    key.get(1..9)
        .and_then(|b| <[u8; 8]>::try_from(b).ok())
        .map(u64::from_be_bytes)
        .ok_or_else(|| StakingError::CorruptKey {
            key: hex::encode(key),
            reason: "pending delegation key must hold a u64 sequence".into(),
        })
}
