use centauri_module::ModuleError;
use centauri_store::StoreError;
use centauri_types::TypesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StakingError {
    #[error("invalid address: {0:?}")]
    InvalidAddress(String),

    #[error("validator {0} not found")]
    ValidatorNotFound(String),

    #[error("validator {0} already exists")]
    ValidatorExists(String),

    #[error("no delegation from {delegator} to {validator}")]
    DelegationNotFound { delegator: String, validator: String },

    #[error("insufficient delegation: have {have}, need {need}")]
    InsufficientDelegation { have: u128, need: u128 },

    #[error("invalid coin denom: got {got}, expected {expected}")]
    InvalidDenom { got: String, expected: String },

    #[error("amount must be positive")]
    ZeroAmount,

    #[error("{what} overflows: {have} + {add}")]
    AmountOverflow {
        what: &'static str,
        have: u128,
        add: u128,
    },

    #[error("too many unbonding entries for {delegator} -> {validator} (max {max})")]
    TooManyUnbondingEntries {
        delegator: String,
        validator: String,
        max: u32,
    },

    #[error("commission rate {rate} is below the minimum {min}")]
    CommissionTooLow { rate: String, min: String },

    #[error("commission rate {0} is above 1")]
    CommissionTooHigh(String),

    #[error("expected authority {expected}, got {got}")]
    Unauthorized { expected: String, got: String },

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("corrupt store key {key}: {reason}")]
    CorruptKey { key: String, reason: String },

    #[error("failed to migrate x/staking from version {from} to {to}: {source}")]
    MigrationRegistration {
        from: u64,
        to: u64,
        #[source]
        source: ModuleError,
    },

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Types(#[from] TypesError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<bincode::Error> for StakingError {
    fn from(e: bincode::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<StakingError> for ModuleError {
    fn from(e: StakingError) -> Self {
        match e {
            StakingError::Store(store) => ModuleError::Store(store),
            other => ModuleError::Other(other.to_string()),
        }
    }
}
