//! Fundamental types for the Centauri app-chain.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! type URLs, governance proposal content, transaction messages, coins, fixed-point
//! decimals, and the module/parameter-key constants of the framework modules.

pub mod coin;
pub mod dec;
pub mod error;
pub mod modules;
pub mod msg;
pub mod proposal;
pub mod type_url;

pub use coin::Coin;
pub use dec::Dec;
pub use error::TypesError;
pub use msg::{Msg, MsgSubmitLegacyProposal, MsgSubmitProposal, StakingMsg};
pub use proposal::{
    CancelSoftwareUpgradeProposal, ParamChange, ParamChangeKey, ParameterChangeProposal, Plan,
    ProposalContent, SoftwareUpgradeProposal, TextProposal,
};
pub use type_url::TypeUrl;
