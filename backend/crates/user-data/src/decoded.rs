//! Client-side views over the double-encoded inventory items.
//!
//! Two styles are offered. [`InventoryItemsExt`] decodes on demand from the
//! wire record. [`DecodedInventory`] converts once at the serialisation
//! boundary into an immutable value that owns the decoded list.

use crate::error::DecodeError;
use crate::items::{decode_items, encode_items};
use crate::record::InventoryRecord;

/// Item accessors on the wire-level [`InventoryRecord`].
///
/// # Example
///
/// ```
/// use user_data::{InventoryItemsExt, InventoryRecord};
///
/// let record = InventoryRecord { id: 1, items: None }.with_items(&["Lever".to_owned()]);
/// assert_eq!(record.items.as_deref(), Some(r#"["Lever"]"#));
/// assert_eq!(record.decoded_items().expect("valid"), ["Lever".to_owned()]);
/// ```
pub trait InventoryItemsExt {
    /// Decode the stored items.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the stored text is not a JSON array of
    /// strings.
    fn decoded_items(&self) -> Result<Vec<String>, DecodeError>;

    /// Return a copy whose stored items encode `items`.
    #[must_use]
    fn with_items(&self, items: &[String]) -> Self;
}

impl InventoryItemsExt for InventoryRecord {
    fn decoded_items(&self) -> Result<Vec<String>, DecodeError> {
        decode_items(self.items.as_deref())
    }

    fn with_items(&self, items: &[String]) -> Self {
        Self {
            id: self.id,
            items: Some(encode_items(items)),
        }
    }
}

/// Inventory with its items already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInventory {
    id: i32,
    items: Vec<String>,
}

impl DecodedInventory {
    /// Build a decoded inventory from parts.
    #[must_use]
    pub const fn new(id: i32, items: Vec<String>) -> Self {
        Self { id, items }
    }

    /// Decode a wire record. A `null` item list becomes an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the record's items are malformed.
    pub fn from_wire_format(record: &InventoryRecord) -> Result<Self, DecodeError> {
        Ok(Self {
            id: record.id,
            items: decode_items(record.items.as_deref())?,
        })
    }

    /// Encode back into the wire record. The item list is always written,
    /// so an empty inventory becomes `"[]"` rather than `null`.
    #[must_use]
    pub fn to_wire_format(&self) -> InventoryRecord {
        InventoryRecord {
            id: self.id,
            items: Some(encode_items(&self.items)),
        }
    }

    /// Inventory identifier.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Decoded items in stored order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }
}
