//! Module wiring seams shared by the app's modules.
//!
//! At startup every module registers its services with a [`Configurator`]:
//! a message server that handles its transactions, a query server, and the
//! store migrations that bring older on-disk layouts up to its current
//! consensus version. The framework owns the real configurator; tests use the
//! in-memory one from `centauri-nullables`.

pub mod configurator;
pub mod error;
pub mod server;

pub use configurator::{Configurator, MigrationHandler};
pub use error::ModuleError;
pub use server::{MsgResponse, MsgServer, QueryServer};
