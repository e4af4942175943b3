//! User and inventory domain model.
//!
//! A [`User`] is identified by its [`Nickname`] and may own one
//! [`Inventory`]. Inventories store their item list as a single encoded text
//! value; [`Inventory::decoded_items`] recovers the list.

use std::fmt;

use serde::{Deserialize, Serialize};
use user_data::{DecodeError, decode_items, encode_items};

/// Validation errors returned by [`Nickname::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The nickname was empty.
    EmptyName,
    /// The nickname started or ended with whitespace.
    SurroundingWhitespace,
    /// The nickname contained a control character.
    ControlCharacters,
    /// The nickname exceeded the maximum length.
    NameTooLong { max: usize },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "nickname must not be empty"),
            Self::SurroundingWhitespace => {
                write!(f, "nickname must not start or end with whitespace")
            }
            Self::ControlCharacters => write!(f, "nickname must not contain control characters"),
            Self::NameTooLong { max } => write!(f, "nickname must be at most {max} characters"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Maximum nickname length, counted in characters.
pub const NICKNAME_MAX: usize = 32;

/// Client-chosen unique user name.
///
/// ## Invariants
/// - Non-empty, at most [`NICKNAME_MAX`] characters.
/// - No leading or trailing whitespace and no control characters.
///
/// # Examples
/// ```
/// use inventory_backend::domain::Nickname;
///
/// assert!(Nickname::new("steve").is_ok());
/// assert!(Nickname::new(" steve").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    /// Validate and construct a [`Nickname`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, UserValidationError> {
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if name.trim() != name {
            return Err(UserValidationError::SurroundingWhitespace);
        }
        if name.chars().any(char::is_control) {
            return Err(UserValidationError::ControlCharacters);
        }
        if name.chars().count() > NICKNAME_MAX {
            return Err(UserValidationError::NameTooLong { max: NICKNAME_MAX });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Nickname> for String {
    fn from(value: Nickname) -> Self {
        value.0
    }
}

impl TryFrom<String> for Nickname {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Non-negative player level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(u32);

impl Level {
    /// Wrap a raw level.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw level.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Level {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Largest number of items a new inventory may hold.
pub const MAX_ITEM_COUNT: usize = 20;

/// Number of items to generate for a new inventory, always within
/// `0..=MAX_ITEM_COUNT`.
///
/// # Examples
/// ```
/// use inventory_backend::domain::ItemCount;
///
/// assert_eq!(ItemCount::clamped(-5).get(), 0);
/// assert_eq!(ItemCount::clamped(999).get(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemCount(usize);

impl ItemCount {
    /// Clamp an arbitrary requested count into the allowed range.
    pub fn clamped(requested: i64) -> Self {
        let max = i64::try_from(MAX_ITEM_COUNT).unwrap_or(i64::MAX);
        let bounded = requested.clamp(0, max);
        Self(usize::try_from(bounded).unwrap_or(0))
    }

    /// The clamped count.
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Store-assigned inventory identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryId(i32);

impl InventoryId {
    /// Wrap a raw identifier.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The raw identifier.
    pub const fn value(self) -> i32 {
        self.0
    }
}

/// Persisted inventory owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    id: InventoryId,
    items: Option<String>,
}

impl Inventory {
    /// Build an inventory from its stored representation.
    pub fn new(id: InventoryId, items: Option<String>) -> Self {
        Self { id, items }
    }

    pub fn id(&self) -> InventoryId {
        self.id
    }

    /// Encoded item list exactly as stored.
    pub fn items(&self) -> Option<&str> {
        self.items.as_deref()
    }

    /// Decode the stored item list; a missing list decodes as empty.
    pub fn decoded_items(&self) -> Result<Vec<String>, DecodeError> {
        decode_items(self.items.as_deref())
    }
}

/// Registered user with its eagerly loaded inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: Nickname,
    level: Level,
    inventory: Option<Inventory>,
}

impl User {
    pub fn new(name: Nickname, level: Level, inventory: Option<Inventory>) -> Self {
        Self {
            name,
            level,
            inventory,
        }
    }

    pub fn name(&self) -> &Nickname {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn inventory(&self) -> Option<&Inventory> {
        self.inventory.as_ref()
    }
}

/// Inventory that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewInventory {
    items: Vec<String>,
}

impl NewInventory {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Text form written to storage; never null, `[]` when empty.
    pub fn encoded(&self) -> String {
        encode_items(&self.items)
    }
}

/// User aggregate handed to the repository for a single atomic insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: Nickname,
    level: Level,
    inventory: Option<NewInventory>,
}

impl NewUser {
    pub fn new(name: Nickname, level: Level, inventory: Option<NewInventory>) -> Self {
        Self {
            name,
            level,
            inventory,
        }
    }

    pub fn name(&self) -> &Nickname {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn inventory(&self) -> Option<&NewInventory> {
        self.inventory.as_ref()
    }
}
