//! Embedded schema migrations.

use diesel::Connection;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while preparing the database schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The database file could not be opened.
    #[error("failed to open database {path}: {message}")]
    Open { path: String, message: String },
    /// A migration failed to apply.
    #[error("failed to migrate database {path}: {message}")]
    Migrate { path: String, message: String },
}

/// Create the `Inventory` and `UserData` tables if they do not exist.
///
/// Blocking; call it from `spawn_blocking` inside async code. Safe to run on
/// every start: applied migrations are recorded and skipped.
pub fn initialize_schema(database_path: &str) -> Result<(), SchemaError> {
    let mut conn = SqliteConnection::establish(database_path).map_err(|err| SchemaError::Open {
        path: database_path.to_owned(),
        message: err.to_string(),
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SchemaError::Migrate {
            path: database_path.to_owned(),
            message: err.to_string(),
        })?;
    info!(
        database = database_path,
        applied = applied.len(),
        "database schema ready"
    );
    Ok(())
}
