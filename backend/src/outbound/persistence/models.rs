//! Internal Diesel row structs.
//!
//! Never exposed to the domain; repositories convert them into domain types.

use diesel::prelude::*;

use super::schema::{inventory, user_data};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_data)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub name: String,
    pub level: i64,
    #[expect(dead_code, reason = "joined inventory row carries the same id")]
    pub inventory_id: Option<i32>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_data)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub level: i64,
    pub inventory_id: Option<i32>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = inventory)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct InventoryRow {
    pub id: i32,
    pub items: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = inventory)]
pub(crate) struct NewInventoryRow<'a> {
    pub items: Option<&'a str>,
}
