//! Shared helpers for backend integration tests.
//!
//! Each test gets its own SQLite file inside a temporary directory. A file is
//! needed rather than `:memory:` because every pooled connection would
//! otherwise see a separate, empty database.

use std::time::Duration;

use diesel::QueryableByName;
use diesel::sql_query;
use diesel::sql_types::BigInt;
use diesel_async::RunQueryDsl;
use inventory_backend::outbound::persistence::{DbPool, PoolConfig, initialize_schema};
use tempfile::TempDir;

/// Migrated SQLite database removed when dropped.
pub struct TestDatabase {
    _dir: TempDir,
    path: String,
}

impl TestDatabase {
    /// Create a migrated database in a fresh temporary directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir
            .path()
            .join("inventory.db")
            .to_string_lossy()
            .into_owned();
        initialize_schema(&path).expect("initialise schema");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Open a small pool over the database.
    pub async fn pool(&self) -> DbPool {
        let config = PoolConfig::new(self.path.as_str())
            .with_max_size(4)
            .with_busy_timeout(Duration::from_secs(10));
        DbPool::new(config).await.expect("create pool")
    }
}

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// Count the rows of `table`.
pub async fn count_rows(pool: &DbPool, table: &str) -> i64 {
    let mut conn = pool.get().await.expect("get connection");
    let row: CountRow = sql_query(format!("SELECT COUNT(*) AS count FROM {table}"))
        .get_result(&mut conn)
        .await
        .expect("count query");
    row.count
}
