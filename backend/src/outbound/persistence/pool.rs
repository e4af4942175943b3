//! Async connection pool for Diesel SQLite connections.
//!
//! SQLite connections are synchronous; `diesel-async` wraps them in
//! [`SyncConnectionWrapper`] so repositories use the same async API as any
//! other backend. Every new connection enables foreign keys, sets a busy
//! timeout and switches the database to WAL so readers do not block behind a
//! writer.

use std::time::Duration;

use diesel::sqlite::SqliteConnection;
use diesel::{ConnectionError, ConnectionResult};
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// Async-wrapped SQLite connection used by every repository.
pub type SqliteConn = SyncConnectionWrapper<SqliteConnection>;

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use inventory_backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("inventory.db")
///     .with_max_size(4)
///     .with_busy_timeout(Duration::from_millis(250));
/// assert_eq!(config.database_path(), "inventory.db");
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_path: String,
    max_size: u32,
    connection_timeout: Duration,
    busy_timeout: Duration,
}

impl PoolConfig {
    /// Create a configuration for the SQLite file at `database_path`.
    ///
    /// Defaults: 8 connections, 30 second checkout timeout, 5 second busy
    /// timeout.
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            max_size: 8,
            connection_timeout: Duration::from_secs(30),
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Set the maximum number of connections in the pool.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Set how long SQLite waits on a locked database before failing.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn database_path(&self) -> &str {
        &self.database_path
    }
}

fn connection_pragmas(busy_timeout: Duration) -> String {
    format!(
        "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL;",
        busy_timeout.as_millis()
    )
}

type SetupFn = Box<dyn Fn(&str) -> BoxFuture<'_, ConnectionResult<SqliteConn>> + Send + Sync>;

fn boxed_setup<F>(setup: F) -> SetupFn
where
    F: for<'a> Fn(&'a str) -> BoxFuture<'a, ConnectionResult<SqliteConn>> + Send + Sync + 'static,
{
    Box::new(setup)
}

fn establish_configured(url: &str, pragmas: String) -> BoxFuture<'_, ConnectionResult<SqliteConn>> {
    async move {
        let mut conn = SqliteConn::establish(url).await?;
        conn.batch_execute(&pragmas)
            .await
            .map_err(ConnectionError::CouldntSetupConfiguration)?;
        Ok(conn)
    }
    .boxed()
}

/// Pool of SQLite connections shared by the repositories.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<SqliteConn>,
}

impl DbPool {
    /// Build the pool and open its first connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when the database cannot be opened or
    /// configured.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let pragmas = connection_pragmas(config.busy_timeout);
        let mut manager_config = ManagerConfig::<SqliteConn>::default();
        manager_config.custom_setup =
            boxed_setup(move |url| establish_configured(url, pragmas.clone()));
        let manager = AsyncDieselConnectionManager::<SqliteConn>::new_with_config(
            config.database_path.as_str(),
            manager_config,
        );

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] if no connection becomes available
    /// within the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, SqliteConn>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
