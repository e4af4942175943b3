//! Item catalogue types and JSON parsing.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogueError;

/// Current supported catalogue version.
const SUPPORTED_VERSION: u32 = 1;

/// Item names used when no catalogue file is configured.
const BUILTIN_ITEMS: [&str; 31] = [
    "Redstone Dust (레드스톤 가루)",
    "Redstone Torch (레드스톤 횃불)",
    "Block of Redstone (레드스톤 블록)",
    "Redstone Repeater (레드스톤 중계기)",
    "Redstone Comparator (레드스톤 비교기)",
    "Target (과녁)",
    "Lever (레버)",
    "Button (버튼)",
    "Pressure Plate (압력판)",
    "Weighted Pressure Plate (무게 압력판)",
    "Sculk Sensor (스컬크 감지체)",
    "Tripwire Hook (철사 덫 갈고리)",
    "Lectern (독서대)",
    "Daylight Detector (햇빛 감지기)",
    "Lightning Rod (피뢰침)",
    "Observer (관측기)",
    "Trapped Chest (덫 상자)",
    "Piston (피스톤)",
    "Slime Block (슬라임 블록)",
    "Honey Block (꿀 블록)",
    "Dispenser (발사기)",
    "Dropper (공급기)",
    "Hopper (호퍼)",
    "Note Block (소리 블록)",
    "Wood Door (나무 문)",
    "Iron Door (철 문)",
    "Wood Fence Gate (나무 울타리 문)",
    "Wood Trapdoor (나무 다락문)",
    "Iron Trapdoor (철 다락문)",
    "TNT",
    "Redstone Lamp (레드스톤 조명)",
];

/// A non-empty list of item names to draw placeholder inventories from.
///
/// # Example
///
/// ```
/// use dummy_items::ItemCatalogue;
///
/// let json = r#"{ "version": 1, "items": ["Lever", "Piston"] }"#;
///
/// let catalogue = ItemCatalogue::from_json(json).expect("valid catalogue");
/// assert_eq!(catalogue.items().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalogue {
    items: Vec<String>,
}

impl ItemCatalogue {
    /// Returns the built-in catalogue of redstone components.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            items: BUILTIN_ITEMS.iter().map(|item| (*item).to_owned()).collect(),
        }
    }

    /// Parses a catalogue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - The items array is empty
    /// - Any item name is blank
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let raw: RawItemCatalogue =
            serde_json::from_str(json).map_err(|e| CatalogueError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a catalogue from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, CatalogueError> {
        let contents = fs::read_to_string(path).map_err(|e| CatalogueError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawItemCatalogue) -> Result<Self, CatalogueError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(CatalogueError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.items.is_empty() {
            return Err(CatalogueError::EmptyItems);
        }

        if let Some(index) = raw.items.iter().position(|item| item.trim().is_empty()) {
            return Err(CatalogueError::BlankItem { index });
        }

        Ok(Self { items: raw.items })
    }

    /// Returns the catalogue's item names. Never empty.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl Default for ItemCatalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Raw catalogue structure for JSON deserialisation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawItemCatalogue {
    version: u32,
    items: Vec<String>,
}
