//! Runtime settings loaded via OrthoConfig.
//!
//! Every value can be set with an `INVENTORY_`-prefixed environment variable
//! or the matching command-line flag.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5171";
const DEFAULT_DATABASE_PATH: &str = "inventory.db";
const DEFAULT_POOL_MAX_SIZE: u32 = 8;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "INVENTORY")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// SQLite database file.
    pub database_path: Option<String>,
    /// Maximum number of pooled connections.
    pub pool_max_size: Option<u32>,
    /// Milliseconds SQLite waits on a locked database.
    pub busy_timeout_ms: Option<u64>,
    /// JSON item catalogue replacing the built-in one.
    pub item_catalogue_path: Option<PathBuf>,
    /// Seed making generated inventories reproducible.
    pub item_seed: Option<u64>,
}

impl ServerSettings {
    /// Parse the listen address, falling back to the default.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw}: {err}"),
            )
        })
    }

    pub fn database_path(&self) -> &str {
        self.database_path
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_PATH)
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "INVENTORY_BIND_ADDR",
        "INVENTORY_DATABASE_PATH",
        "INVENTORY_POOL_MAX_SIZE",
        "INVENTORY_BUSY_TIMEOUT_MS",
        "INVENTORY_ITEM_CATALOGUE_PATH",
        "INVENTORY_ITEM_SEED",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("inventory-backend")])
            .expect("settings should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            "0.0.0.0:5171".parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(settings.database_path(), "inventory.db");
        assert_eq!(settings.pool_max_size(), 8);
        assert_eq!(settings.busy_timeout(), Duration::from_secs(5));
        assert!(settings.item_catalogue_path.is_none());
        assert!(settings.item_seed.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("INVENTORY_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("INVENTORY_DATABASE_PATH", Some("/tmp/users.db".to_owned())),
            ("INVENTORY_POOL_MAX_SIZE", Some("2".to_owned())),
            ("INVENTORY_BUSY_TIMEOUT_MS", Some("250".to_owned())),
            (
                "INVENTORY_ITEM_CATALOGUE_PATH",
                Some("/tmp/items.json".to_owned()),
            ),
            ("INVENTORY_ITEM_SEED", Some("42".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("parses"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(settings.database_path(), "/tmp/users.db");
        assert_eq!(settings.pool_max_size(), 2);
        assert_eq!(settings.busy_timeout(), Duration::from_millis(250));
        assert_eq!(
            settings.item_catalogue_path,
            Some(PathBuf::from("/tmp/items.json"))
        );
        assert_eq!(settings.item_seed, Some(42));
    }

    #[rstest]
    fn malformed_bind_address_is_reported() {
        let _guard = lock_env([("INVENTORY_BIND_ADDR", Some("not-an-address".to_owned()))]);

        let settings = load_from_empty_args();
        let error = settings.bind_addr().expect_err("invalid");
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    }
}
