//! Mint module state and its simulation store decoder.

pub mod error;
pub mod keeper;
pub mod keys;
pub mod simulation;
pub mod types;

pub use error::{DecodeError, MintError};
pub use keeper::MintKeeper;
pub use simulation::{decode_store, new_decode_store};
pub use types::Minter;
