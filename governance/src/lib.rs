//! Governance proposal whitelist for the Centauri app-chain.
//!
//! Governance on this chain may only execute a curated set of actions:
//! - v1 proposals may carry only messages whose type URL is on the module
//!   whitelist ([`is_module_whitelisted`]);
//! - legacy proposal content is classified by [`is_proposal_whitelisted`]:
//!   parameter changes pass only if every `(subspace, key)` is whitelisted,
//!   software upgrades and their cancellation always pass, anything else is
//!   rejected.
//!
//! Both whitelists are built once on first use and never mutated, so the
//! predicates are safe to call from any thread.

pub mod error;
pub mod filter;
pub mod params;
pub mod proposal;
pub mod whitelist;

pub use error::AnteError;
pub use filter::check_msgs;
pub use params::{is_param_whitelisted, whitelisted_params};
pub use proposal::{is_param_change_whitelisted, is_proposal_whitelisted, param_change_keys};
pub use whitelist::{is_module_whitelisted, whitelisted_type_urls};
