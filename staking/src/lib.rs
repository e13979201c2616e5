//! Custom staking module for the Centauri app-chain.
//!
//! Wraps the framework's staking module with a custom keeper: delegations
//! submitted through `MsgDelegate` are buffered and applied at the epoch
//! boundary instead of immediately. Every other staking message is served by
//! the default message server.
//!
//! On startup [`AppModule::register_services`] installs the custom message
//! server, the query server and the store migrations 1→2, 2→3 and 3→4.

pub mod error;
pub mod keeper;
pub mod keys;
pub mod migrations;
pub mod module;
pub mod msg_server;
pub mod params;
pub mod querier;

pub use error::StakingError;
pub use keeper::{BaseKeeper, Keeper, PendingDelegation, Validator};
pub use migrations::Migrator;
pub use module::{AppModule, CONSENSUS_VERSION};
pub use msg_server::{BaseMsgServer, CustomMsgServer};
pub use params::Params;
pub use querier::Querier;
