//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: SQLite repositories built on Diesel.
//! - **items**: placeholder item generation from the `dummy-items` catalogue.
//!
//! Adapters translate between domain types and infrastructure types and hold
//! no business rules.

pub mod items;
pub mod persistence;
