//! Nickname registry backend.
//!
//! Users register a unique nickname and receive a generated inventory. The
//! crate is laid out hexagonally: [`domain`] holds the model, services and
//! ports, [`inbound`] the Actix HTTP adapter and [`outbound`] the SQLite
//! persistence and item generation adapters.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use domain::TraceId;
pub use middleware::Trace;
