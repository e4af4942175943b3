//! Placeholder inventory items for demonstration purposes.
//!
//! Registrations ask for a number of inventory items without naming them.
//! This crate supplies believable item names from a catalogue and picks them
//! either randomly or deterministically from a seed. It is independent of
//! backend domain types to avoid circular dependencies.
//!
//! # Overview
//!
//! - [`ItemCatalogue::builtin`] returns the default table of redstone items.
//! - [`ItemCatalogue::from_json`] and [`ItemCatalogue::from_path`] load a
//!   custom catalogue.
//! - [`pick_items`] draws from any RNG; [`generate_items`] is reproducible
//!   for a given seed.
//!
//! # Example
//!
//! ```
//! use dummy_items::{ItemCatalogue, generate_items};
//!
//! let catalogue = ItemCatalogue::builtin();
//! let items = generate_items(&catalogue, 42, 5);
//!
//! assert_eq!(items.len(), 5);
//! assert_eq!(items, generate_items(&catalogue, 42, 5));
//! ```

mod catalogue;
mod error;
mod generator;

pub use catalogue::ItemCatalogue;
pub use error::CatalogueError;
pub use generator::{generate_items, pick_items};
