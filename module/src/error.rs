use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("migration for module {module} from version {from_version} is already registered")]
    DuplicateMigration { module: String, from_version: u64 },

    #[error("invalid migration version {0}: versions start at 1")]
    InvalidMigrationVersion(u64),

    #[error("no message server registered for module {0}")]
    NoMsgServer(String),

    #[error("message {0} is not handled by this server")]
    UnhandledMessage(String),

    #[error("unknown query path: {0}")]
    UnknownQuery(String),

    #[error("migration of {module} from version {from_version} failed: {reason}")]
    MigrationFailed {
        module: String,
        from_version: u64,
        reason: String,
    },

    #[error("store error: {0}")]
    Store(#[from] centauri_store::StoreError),

    #[error("{0}")]
    Other(String),
}
