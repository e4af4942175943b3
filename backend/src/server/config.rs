//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use inventory_backend::domain::ports::ItemGenerator;
use inventory_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) item_generator: Option<Arc<dyn ItemGenerator>>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            item_generator: None,
        }
    }

    /// Attach the database pool backing the user repository.
    ///
    /// Without a pool the server answers from fixture ports.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Replace the default catalogue-backed item generator.
    #[must_use]
    pub fn with_item_generator(mut self, generator: Arc<dyn ItemGenerator>) -> Self {
        self.item_generator = Some(generator);
        self
    }
}
