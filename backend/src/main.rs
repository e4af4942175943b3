//! Backend entry-point: prepares the database and serves the user registry.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use dummy_items::ItemCatalogue;
use inventory_backend::domain::ports::ItemGenerator;
use inventory_backend::inbound::http::health::HealthState;
use inventory_backend::outbound::items::CatalogueItemGenerator;
use inventory_backend::outbound::persistence::{DbPool, PoolConfig, initialize_schema};
use server::{ServerConfig, ServerSettings, create_server};

fn build_item_generator(settings: &ServerSettings) -> std::io::Result<Arc<dyn ItemGenerator>> {
    let catalogue = match &settings.item_catalogue_path {
        Some(path) => ItemCatalogue::from_path(path).map_err(std::io::Error::other)?,
        None => ItemCatalogue::builtin(),
    };
    let generator = match settings.item_seed {
        Some(seed) => CatalogueItemGenerator::seeded(catalogue, seed),
        None => CatalogueItemGenerator::new(catalogue),
    };
    Ok(Arc::new(generator))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr()?;
    let database_path = settings.database_path().to_owned();

    let schema_path = database_path.clone();
    tokio::task::spawn_blocking(move || initialize_schema(&schema_path))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(
        PoolConfig::new(database_path.as_str())
            .with_max_size(settings.pool_max_size())
            .with_busy_timeout(settings.busy_timeout()),
    )
    .await
    .map_err(std::io::Error::other)?;

    let config = ServerConfig::new(bind_addr)
        .with_db_pool(pool)
        .with_item_generator(build_item_generator(&settings)?);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, database = %database_path, "inventory backend listening");
    server.await
}
