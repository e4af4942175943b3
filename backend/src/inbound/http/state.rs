//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the domain's
//! driving ports, so they can be tested without a database.

use std::sync::Arc;

use crate::domain::ports::{UserRegistration, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub registration: Arc<dyn UserRegistration>,
}

impl HttpState {
    pub fn new(users: Arc<dyn UsersQuery>, registration: Arc<dyn UserRegistration>) -> Self {
        Self {
            users,
            registration,
        }
    }
}
