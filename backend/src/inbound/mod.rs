//! Inbound adapters translating external requests into domain calls.
//!
//! Framework details stay here; handlers only talk to driving ports.

pub mod http;
