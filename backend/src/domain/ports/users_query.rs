//! Driving port for user lookups.
//!
//! HTTP handlers read users through this port without touching persistence.

use async_trait::async_trait;

use crate::domain::{Error, Inventory, InventoryId, Level, Nickname, User};

/// Use-case port for listing and fetching users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// All users in registration order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// The user named `name`, or `None` when no such user exists.
    async fn get_user(&self, name: &str) -> Result<Option<User>, Error>;
}

/// In-memory query serving a single fixed user.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

impl FixtureUsersQuery {
    const NAME: &'static str = "steve";

    fn fixture_user() -> Result<User, Error> {
        let name = Nickname::new(Self::NAME)
            .map_err(|err| Error::internal(format!("invalid fixture nickname: {err}")))?;
        let inventory = Inventory::new(InventoryId::new(1), Some(r#"["Lever"]"#.to_owned()));
        Ok(User::new(name, Level::new(1), Some(inventory)))
    }
}

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(vec![Self::fixture_user()?])
    }

    async fn get_user(&self, name: &str) -> Result<Option<User>, Error> {
        if name != Self::NAME {
            return Ok(None);
        }
        Self::fixture_user().map(Some)
    }
}
