//! JSON records exchanged by the user lookup endpoints.

use serde::{Deserialize, Serialize};

/// Inventory as it appears on the wire.
///
/// `items` carries the stored JSON text untouched, so clients decode it a
/// second time. A `null` means the inventory has no recorded items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Store-assigned inventory identifier.
    pub id: i32,
    /// JSON-encoded array of item names, or `null`.
    pub items: Option<String>,
}

/// User as it appears on the wire.
///
/// Serialises as `{"name": ..., "level": ..., "inventory": {...} | null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique nickname.
    pub name: String,
    /// User level.
    pub level: u32,
    /// Eagerly loaded inventory, when the user owns one.
    pub inventory: Option<InventoryRecord>,
}
