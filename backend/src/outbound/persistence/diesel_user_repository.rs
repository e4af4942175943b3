//! SQLite-backed `UserRepository` adapter.
//!
//! Users are read with their inventory through a single `LEFT JOIN`. New
//! users and their inventory are written in one transaction so a rejected
//! user never leaves an orphaned inventory row behind.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Inventory, InventoryId, Level, NewUser, Nickname, User};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{InventoryRow, NewInventoryRow, NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{inventory, user_data};

/// Diesel implementation of [`UserRepository`].
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository over `pool`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use inventory_backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("inventory.db")).await?;
    /// let _repository = DieselUserRepository::new(pool);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_user(
    (user, inventory): (UserRow, Option<InventoryRow>),
) -> Result<User, UserPersistenceError> {
    let name = Nickname::new(user.name).map_err(|err| {
        debug!(error = %err, "stored nickname failed validation");
        UserPersistenceError::query("stored nickname is invalid")
    })?;
    let level = u32::try_from(user.level).map_err(|_| {
        debug!(level = user.level, nickname = %name, "stored level out of range");
        UserPersistenceError::query("stored level is out of range")
    })?;
    let inventory = inventory.map(|row| Inventory::new(InventoryId::new(row.id), row.items));
    Ok(User::new(name, Level::new(level), inventory))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert_user_with_inventory(
        &self,
        user: &NewUser,
    ) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let encoded = user.inventory().map(|inv| inv.encoded());
        let name = user.name().as_ref();
        let level = i64::from(user.level().value());

        let outcome = conn
            .transaction(|conn| {
                async move {
                    let inventory_id = match encoded.as_deref() {
                        Some(items) => Some(
                            diesel::insert_into(inventory::table)
                                .values(&NewInventoryRow { items: Some(items) })
                                .returning(inventory::id)
                                .get_result::<i32>(conn)
                                .await?,
                        ),
                        None => None,
                    };

                    diesel::insert_into(user_data::table)
                        .values(&NewUserRow {
                            name,
                            level,
                            inventory_id,
                        })
                        .execute(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>(())
                }
                .scope_boxed()
            })
            .await;

        match outcome {
            Ok(()) => Ok(()),
            Err(error) if is_unique_violation(&error) => {
                debug!(nickname = name, "insert rejected by unique constraint");
                Err(UserPersistenceError::duplicate_name(name))
            }
            Err(error) => Err(map_diesel_error(error)),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(UserRow, Option<InventoryRow>)> = user_data::table
            .left_join(inventory::table)
            .select((UserRow::as_select(), Option::<InventoryRow>::as_select()))
            .order(user_data::rowid.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_name(&self, name: &Nickname) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<(UserRow, Option<InventoryRow>)> = user_data::table
            .left_join(inventory::table)
            .filter(user_data::name.eq(name.as_ref()))
            .select((UserRow::as_select(), Option::<InventoryRow>::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user_row(name: &str, level: i64) -> UserRow {
        UserRow {
            name: name.to_owned(),
            level,
            inventory_id: Some(4),
        }
    }

    #[rstest]
    fn rows_convert_to_users_with_inventory() {
        let inventory = InventoryRow {
            id: 4,
            items: Some(r#"["Lever"]"#.to_owned()),
        };
        let user = row_to_user((user_row("steve", 12), Some(inventory))).expect("converts");

        assert_eq!(user.name().as_ref(), "steve");
        assert_eq!(user.level(), Level::new(12));
        let inventory = user.inventory().expect("inventory");
        assert_eq!(inventory.id(), InventoryId::new(4));
        assert_eq!(inventory.items(), Some(r#"["Lever"]"#));
    }

    #[rstest]
    #[case(-1)]
    #[case(i64::from(u32::MAX) + 1)]
    fn out_of_range_levels_are_query_errors(#[case] level: i64) {
        let error = row_to_user((user_row("steve", level), None)).expect_err("rejected");
        assert!(matches!(error, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let error = map_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(error, UserPersistenceError::Connection { .. }));
        assert!(error.to_string().contains("connection refused"));
    }
}
