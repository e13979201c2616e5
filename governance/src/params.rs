//! Module parameters a parameter-change proposal may touch.

use centauri_types::modules::{
    bank, ccv_consumer, distribution, gov, ibc_transfer, ica_host, staking,
};
use centauri_types::ParamChangeKey;
use once_cell::sync::Lazy;
use std::collections::HashSet;

const WHITELISTED_PARAMS: &[(&str, &str)] = &[
    // bank
    (bank::MODULE_NAME, bank::KEY_SEND_ENABLED),
    (bank::MODULE_NAME, bank::KEY_DEFAULT_SEND_ENABLED),
    // governance
    (gov::MODULE_NAME, gov::KEY_DEPOSIT_PARAMS),
    (gov::MODULE_NAME, gov::KEY_VOTING_PARAMS),
    (gov::MODULE_NAME, gov::KEY_TALLY_PARAMS),
    // staking
    (staking::MODULE_NAME, staking::KEY_UNBONDING_TIME),
    (staking::MODULE_NAME, staking::KEY_MAX_VALIDATORS),
    (staking::MODULE_NAME, staking::KEY_MAX_ENTRIES),
    (staking::MODULE_NAME, staking::KEY_HISTORICAL_ENTRIES),
    (staking::MODULE_NAME, staking::KEY_BOND_DENOM),
    (staking::MODULE_NAME, staking::KEY_MIN_COMMISSION_RATE),
    // ccv consumer
    (ccv_consumer::MODULE_NAME, ccv_consumer::KEY_REWARD_DENOMS),
    (ccv_consumer::MODULE_NAME, ccv_consumer::KEY_ENABLED),
    (ccv_consumer::MODULE_NAME, ccv_consumer::KEY_BLOCKS_PER_DISTRIBUTION_TRANSMISSION),
    (ccv_consumer::MODULE_NAME, ccv_consumer::KEY_DISTRIBUTION_TRANSMISSION_CHANNEL),
    (ccv_consumer::MODULE_NAME, ccv_consumer::KEY_PROVIDER_FEE_POOL_ADDR_STR),
    (ccv_consumer::MODULE_NAME, ccv_consumer::KEY_TRANSFER_TIMEOUT_PERIOD),
    (ccv_consumer::MODULE_NAME, ccv_consumer::KEY_CONSUMER_REDISTRIBUTION_FRAC),
    (ccv_consumer::MODULE_NAME, ccv_consumer::KEY_HISTORICAL_ENTRIES),
    (ccv_consumer::MODULE_NAME, ccv_consumer::KEY_CONSUMER_UNBONDING_PERIOD),
    (ccv_consumer::MODULE_NAME, ccv_consumer::KEY_SOFT_OPT_OUT_THRESHOLD),
    (ccv_consumer::MODULE_NAME, ccv_consumer::KEY_PROVIDER_REWARD_DENOMS),
    // distribution
    (distribution::MODULE_NAME, distribution::KEY_COMMUNITY_TAX),
    (distribution::MODULE_NAME, distribution::KEY_WITHDRAW_ADDR_ENABLED),
    // ibc transfer
    (ibc_transfer::MODULE_NAME, ibc_transfer::KEY_SEND_ENABLED),
    // interchain accounts host
    (ica_host::SUB_MODULE_NAME, ica_host::KEY_HOST_ENABLED),
    (ica_host::SUB_MODULE_NAME, ica_host::KEY_ALLOW_MESSAGES),
];

static WHITELISTED_PARAM_KEYS: Lazy<HashSet<ParamChangeKey>> = Lazy::new(|| {
    WHITELISTED_PARAMS
        .iter()
        .map(|(module, key)| ParamChangeKey::new(*module, *key))
        .collect()
});

/// Whether governance may change `key` through a parameter-change proposal.
pub fn is_param_whitelisted(key: &ParamChangeKey) -> bool {
    WHITELISTED_PARAM_KEYS.contains(key)
}

/// The whitelisted `(module, key)` pairs, in declaration order.
pub fn whitelisted_params() -> &'static [(&'static str, &'static str)] {
    WHITELISTED_PARAMS
}
