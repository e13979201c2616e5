//! Abstract key-value storage traits for the Centauri app-chain modules.
//!
//! Every backend (the framework's IAVL store, in-memory for testing) implements
//! [`KvStore`]. Module keepers, migrations and simulation decoders depend only
//! on the trait.

pub mod error;
pub mod kv;
pub mod subspace;

pub use error::StoreError;
pub use kv::{KvPair, KvStore};
pub use subspace::Subspace;
