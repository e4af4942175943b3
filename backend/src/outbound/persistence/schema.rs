//! Diesel table definitions for the SQLite schema.
//!
//! These must match `backend/migrations` exactly. Table and column names keep
//! their stored spelling through `sql_name`.

diesel::table! {
    /// Registered users, keyed by nickname.
    ///
    /// `rowid` is SQLite's implicit row id; it increases with every insert and
    /// gives listings their registration order.
    #[sql_name = "UserData"]
    user_data (name) {
        rowid -> BigInt,
        name -> Text,
        level -> BigInt,
        #[sql_name = "inventoryId"]
        inventory_id -> Nullable<Integer>,
    }
}

diesel::table! {
    /// Inventories; `items` holds the JSON-encoded item list.
    #[sql_name = "Inventory"]
    inventory (id) {
        id -> Integer,
        items -> Nullable<Text>,
    }
}

diesel::joinable!(user_data -> inventory (inventory_id));
diesel::allow_tables_to_appear_in_same_query!(user_data, inventory);
