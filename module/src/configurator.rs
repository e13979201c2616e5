//! Startup registration of module services and migrations.

use crate::{ModuleError, MsgServer, QueryServer};
use std::sync::Arc;

/// A store migration from one consensus version to the next.
pub type MigrationHandler = Box<dyn Fn() -> Result<(), ModuleError> + Send + Sync>;

/// Collects the services and migrations of every module during app wiring.
pub trait Configurator {
    /// Install the message server for `module`, replacing any previous one.
    fn register_msg_server(&mut self, module: &str, server: Arc<dyn MsgServer>);

    /// Install the query server for `module`, replacing any previous one.
    fn register_query_server(&mut self, module: &str, server: Arc<dyn QueryServer>);

    /// Register the migration that upgrades `module`'s store from
    /// `from_version` to `from_version + 1`.
    ///
    /// Fails if `from_version` is 0 or a migration for the same
    /// `(module, from_version)` was already registered.
    fn register_migration(
        &mut self,
        module: &str,
        from_version: u64,
        handler: MigrationHandler,
    ) -> Result<(), ModuleError>;
}
