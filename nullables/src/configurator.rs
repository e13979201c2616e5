//! Nullable configurator: records module registrations for inspection.

use centauri_module::{
    Configurator, MigrationHandler, ModuleError, MsgResponse, MsgServer, QueryServer,
};
use centauri_types::Msg;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// An in-memory [`Configurator`] that keeps every registration and can
/// route messages, answer queries and run migrations like the app would.
#[derive(Default)]
pub struct NullConfigurator {
    msg_servers: HashMap<String, Arc<dyn MsgServer>>,
    query_servers: HashMap<String, Arc<dyn QueryServer>>,
    migrations: BTreeMap<(String, u64), MigrationHandler>,
}

impl NullConfigurator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn msg_server(&self, module: &str) -> Option<Arc<dyn MsgServer>> {
        self.msg_servers.get(module).cloned()
    }

    pub fn query_server(&self, module: &str) -> Option<Arc<dyn QueryServer>> {
        self.query_servers.get(module).cloned()
    }

    /// Versions a migration was registered from, ascending.
    pub fn migration_versions(&self, module: &str) -> Vec<u64> {
        self.migrations
            .keys()
            .filter(|(m, _)| m == module)
            .map(|(_, v)| *v)
            .collect()
    }

    /// Send `msg` to the message server registered for `module`.
    pub fn route(&self, module: &str, msg: &Msg) -> Result<MsgResponse, ModuleError> {
        self.msg_server(module)
            .ok_or_else(|| ModuleError::NoMsgServer(module.to_string()))?
            .handle(msg)
    }

    /// Run the migrations of `module` that take it from `from` up to `to`.
    pub fn run_migrations(&self, module: &str, from: u64, to: u64) -> Result<(), ModuleError> {
        for version in from..to {
            let handler = self
                .migrations
                .get(&(module.to_string(), version))
                .ok_or_else(|| ModuleError::MigrationFailed {
                    module: module.to_string(),
                    from_version: version,
                    reason: "no migration registered".into(),
                })?;
            handler()?;
        }
        Ok(())
    }
}

impl Configurator for NullConfigurator {
    fn register_msg_server(&mut self, module: &str, server: Arc<dyn MsgServer>) {
        self.msg_servers.insert(module.to_string(), server);
    }

    fn register_query_server(&mut self, module: &str, server: Arc<dyn QueryServer>) {
        self.query_servers.insert(module.to_string(), server);
    }

    fn register_migration(
        &mut self,
        module: &str,
        from_version: u64,
        handler: MigrationHandler,
    ) -> Result<(), ModuleError> {
        if from_version == 0 {
            return Err(ModuleError::InvalidMigrationVersion(from_version));
        }
        let key = (module.to_string(), from_version);
        if self.migrations.contains_key(&key) {
            return Err(ModuleError::DuplicateMigration {
                module: module.to_string(),
                from_version,
            });
        }
        self.migrations.insert(key, handler);
        Ok(())
    }
}
