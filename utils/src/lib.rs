//! Shared utilities for the Centauri app-chain crates.

pub mod logging;

pub use logging::{init_logging, LogFormat};
