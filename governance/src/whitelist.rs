//! Message types a governance proposal may execute.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const WHITELISTED_TYPE_URLS: &[&str] = &[
    "/cosmos.gov.v1.MsgUpdateParams",
    "/cosmos.bank.v1beta1.MsgUpdateParams",
    "/cosmos.staking.v1beta1.MsgUpdateParams",
    "/cosmos.distribution.v1beta1.MsgUpdateParams",
    "/cosmos.mint.v1beta1.MsgUpdateParams",
    "/cosmos.upgrade.v1beta1.MsgSoftwareUpgrade",
    "/cosmos.upgrade.v1beta1.MsgCancelUpgrade",
    "/centauri.transfermiddleware.v1beta1.MsgAddParachainIBCTokenInfo",
    "/centauri.transfermiddleware.v1beta1.MsgRemoveParachainIBCTokenInfo",
    "/centauri.transfermiddleware.v1beta1.MsgAddRlyAddress",
    "/ibc.lightclients.wasm.v1.MsgPushNewWasmCode",
    "/ibc.lightclients.wasm.v1.MsgUpdateWasmCodeId",
];

static WHITELISTED_MODULE_MSGS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| WHITELISTED_TYPE_URLS.iter().copied().collect());

/// Whether a proposal may execute a message of type `type_url`.
///
/// Exact, case-sensitive match; no prefix or wildcard matching.
pub fn is_module_whitelisted(type_url: &str) -> bool {
    WHITELISTED_MODULE_MSGS.contains(type_url)
}

/// The whitelisted type URLs, in declaration order.
pub fn whitelisted_type_urls() -> &'static [&'static str] {
    WHITELISTED_TYPE_URLS
}
