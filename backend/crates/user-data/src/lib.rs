//! Shared wire records for the inventory backend and its clients.
//!
//! The backend stores a user's inventory items in a single text column because
//! the embedded store has no array column type. This crate owns the JSON shape
//! exchanged over HTTP and the codec that moves an item list in and out of that
//! text column.
//!
//! # Overview
//!
//! - [`UserRecord`] and [`InventoryRecord`] mirror the JSON payloads returned
//!   by `GET /` and `GET /name={name}`. `InventoryRecord::items` stays a JSON
//!   *string* on the wire.
//! - [`RegisterUserResult`] is the coarse result body of `/register`.
//! - [`encode_items`] and [`decode_items`] convert between `Vec<String>` and
//!   the stored text.
//! - [`InventoryItemsExt`] and [`DecodedInventory`] are two ways for callers to
//!   work with decoded items.
//!
//! # Example
//!
//! ```
//! use user_data::{UserRecord, DecodedInventory};
//!
//! let json = r#"{"name":"steve","level":3,"inventory":{"id":1,"items":"[\"TNT\"]"}}"#;
//! let user: UserRecord = serde_json::from_str(json).expect("valid payload");
//! let inventory = user.inventory.as_ref().expect("inventory present");
//! let decoded = DecodedInventory::from_wire_format(inventory).expect("valid items");
//!
//! assert_eq!(decoded.items(), ["TNT".to_owned()]);
//! ```

mod decoded;
mod error;
mod items;
mod record;
mod register;

pub use decoded::{DecodedInventory, InventoryItemsExt};
pub use error::DecodeError;
pub use items::{decode_items, encode_items};
pub use record::{InventoryRecord, UserRecord};
pub use register::RegisterUserResult;
