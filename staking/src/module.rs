//! The staking app module: wiring of the custom keeper into the app.

use crate::error::StakingError;
use crate::keeper::Keeper;
use crate::migrations::Migrator;
use crate::msg_server::CustomMsgServer;
use crate::querier::Querier;
use centauri_module::{Configurator, MigrationHandler, ModuleError};
use centauri_store::Subspace;
use centauri_types::modules::staking::MODULE_NAME;
use std::sync::Arc;

/// Store layout version after all registered migrations have run.
pub const CONSENSUS_VERSION: u64 = 4;

/// The staking module, built around the custom keeper.
#[derive(Clone)]
pub struct AppModule {
    keeper: Keeper,
    subspace: Subspace,
}

impl AppModule {
    pub fn new(keeper: Keeper, subspace: Subspace) -> Self {
        Self { keeper, subspace }
    }

    pub fn name(&self) -> &'static str {
        MODULE_NAME
    }

    pub fn consensus_version(&self) -> u64 {
        CONSENSUS_VERSION
    }

    pub fn keeper(&self) -> &Keeper {
        &self.keeper
    }

    /// Register the module's services and migrations.
    ///
    /// # Panics
    ///
    /// Panics if a migration cannot be registered: the binary's wiring does
    /// not match the store versions it claims to support.
    pub fn register_services(&self, cfg: &mut dyn Configurator) {
        if let Err(e) = self.try_register_services(cfg) {
            panic!("{e}");
        }
    }

    /// Like [`AppModule::register_services`] but returns the registration error.
    pub fn try_register_services(&self, cfg: &mut dyn Configurator) -> Result<(), StakingError> {
        cfg.register_msg_server(
            MODULE_NAME,
            Arc::new(CustomMsgServer::new(
                self.keeper.keeper.clone(),
                self.keeper.clone(),
            )),
        );
        cfg.register_query_server(MODULE_NAME, Arc::new(Querier::new(self.keeper.clone())));

        let migrator = Migrator::new(self.keeper.keeper.clone(), self.subspace.clone());
        let steps: [(u64, fn(&Migrator) -> Result<(), StakingError>); 3] = [
            (1, Migrator::migrate_1_to_2),
            (2, Migrator::migrate_2_to_3),
            (3, Migrator::migrate_3_to_4),
        ];
        for (from, step) in steps {
            cfg.register_migration(MODULE_NAME, from, migration(migrator.clone(), from, step))
                .map_err(|source| StakingError::MigrationRegistration {
                    from,
                    to: from + 1,
                    source,
                })?;
        }
        tracing::debug!(module = MODULE_NAME, "registered services and migrations");
        Ok(())
    }

    /// End-of-epoch hook: apply the delegations buffered during the epoch.
    pub fn end_epoch(&self) -> Result<usize, StakingError> {
        self.keeper.apply_pending_delegations()
    }
}

fn migration(
    migrator: Migrator,
    from: u64,
    step: fn(&Migrator) -> Result<(), StakingError>,
) -> MigrationHandler {
    Box::new(move || {
        step(&migrator).map_err(|e| ModuleError::MigrationFailed {
            module: MODULE_NAME.to_string(),
            from_version: from,
            reason: e.to_string(),
        })
    })
}
