//! SQLite persistence adapters using Diesel.
//!
//! - Repository implementations only translate between Diesel rows and
//!   domain types.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Connections come from a `bb8` pool of `diesel-async` wrapped SQLite
//!   connections.
//!
//! # Example
//!
//! ```rust,no_run
//! use inventory_backend::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, initialize_schema,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! initialize_schema("inventory.db")?;
//! let pool = DbPool::new(PoolConfig::new("inventory.db")).await?;
//! let _repository = DieselUserRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{SchemaError, initialize_schema};
pub use pool::{DbPool, PoolConfig, PoolError, SqliteConn};
