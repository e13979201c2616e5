//! Module names and legacy parameter-store keys of the framework modules.
//!
//! These strings are contracts with the parameter schemas of the respective
//! modules; a governance parameter-change proposal addresses a parameter as
//! `(subspace, key)` using exactly these values.

pub mod bank {
    pub const MODULE_NAME: &str = "bank";
    pub const KEY_SEND_ENABLED: &str = "SendEnabled";
    pub const KEY_DEFAULT_SEND_ENABLED: &str = "DefaultSendEnabled";
}

pub mod gov {
    pub const MODULE_NAME: &str = "gov";
    /// min_deposit, max_deposit_period
    pub const KEY_DEPOSIT_PARAMS: &str = "depositparams";
    /// voting_period
    pub const KEY_VOTING_PARAMS: &str = "votingparams";
    /// quorum, threshold, veto_threshold
    pub const KEY_TALLY_PARAMS: &str = "tallyparams";
}

pub mod staking {
    pub const MODULE_NAME: &str = "staking";
    pub const KEY_UNBONDING_TIME: &str = "UnbondingTime";
    pub const KEY_MAX_VALIDATORS: &str = "MaxValidators";
    pub const KEY_MAX_ENTRIES: &str = "MaxEntries";
    pub const KEY_HISTORICAL_ENTRIES: &str = "HistoricalEntries";
    pub const KEY_BOND_DENOM: &str = "BondDenom";
    pub const KEY_MIN_COMMISSION_RATE: &str = "MinCommissionRate";
}

pub mod distribution {
    pub const MODULE_NAME: &str = "distribution";
    pub const KEY_COMMUNITY_TAX: &str = "communitytax";
    pub const KEY_WITHDRAW_ADDR_ENABLED: &str = "withdrawaddrenabled";
}

pub mod mint {
    pub const MODULE_NAME: &str = "mint";
}

pub mod ibc_transfer {
    pub const MODULE_NAME: &str = "transfer";
    pub const KEY_SEND_ENABLED: &str = "SendEnabled";
}

pub mod ica_host {
    /// The host is a sub-module of interchain accounts and owns its own subspace.
    pub const SUB_MODULE_NAME: &str = "icahost";
    pub const KEY_HOST_ENABLED: &str = "HostEnabled";
    pub const KEY_ALLOW_MESSAGES: &str = "AllowMessages";
}

pub mod ccv_consumer {
    pub const MODULE_NAME: &str = "ccvconsumer";
    pub const KEY_REWARD_DENOMS: &str = "RewardDenoms";
    pub const KEY_ENABLED: &str = "Enabled";
    pub const KEY_BLOCKS_PER_DISTRIBUTION_TRANSMISSION: &str = "BlocksPerDistributionTransmission";
    pub const KEY_DISTRIBUTION_TRANSMISSION_CHANNEL: &str = "DistributionTransmissionChannel";
    pub const KEY_PROVIDER_FEE_POOL_ADDR_STR: &str = "ProviderFeePoolAddrStr";
    pub const KEY_TRANSFER_TIMEOUT_PERIOD: &str = "TransferTimeoutPeriod";
    pub const KEY_CONSUMER_REDISTRIBUTION_FRAC: &str = "ConsumerRedistributionFraction";
    pub const KEY_HISTORICAL_ENTRIES: &str = "HistoricalEntries";
    pub const KEY_CONSUMER_UNBONDING_PERIOD: &str = "UnbondingPeriod";
    pub const KEY_SOFT_OPT_OUT_THRESHOLD: &str = "SoftOptOutThreshold";
    pub const KEY_PROVIDER_REWARD_DENOMS: &str = "ProviderRewardDenoms";
}
