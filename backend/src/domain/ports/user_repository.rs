//! Driven port for user and inventory persistence.

use async_trait::async_trait;

use crate::domain::{NewUser, Nickname, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// A connection could not be checked out of the pool.
        Connection { message: String } => "user repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The nickname is already taken; nothing was written.
        DuplicateName { name: String } => "nickname already registered: {name}",
    }
}

/// Owns the stored users and their inventories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user and, when present, its inventory in one transaction.
    ///
    /// Either both rows are written or neither is. A nickname collision is
    /// reported as [`UserPersistenceError::DuplicateName`].
    async fn insert_user_with_inventory(&self, user: &NewUser)
    -> Result<(), UserPersistenceError>;

    /// Every user in insertion order, with inventories loaded.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// The user registered under `name`, if any.
    async fn find_by_name(&self, name: &Nickname) -> Result<Option<User>, UserPersistenceError>;
}
