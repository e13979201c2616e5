//! Nullable infrastructure for deterministic testing.
//!
//! The framework's store and configurator are abstracted behind traits
//! (`centauri_store::KvStore`, `centauri_module::Configurator`). This crate
//! provides test-friendly implementations that:
//! - keep everything in memory
//! - can be inspected programmatically
//! - never touch the filesystem or network

pub mod configurator;
pub mod store;

pub use configurator::NullConfigurator;
pub use store::NullStore;
