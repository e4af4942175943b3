//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use inventory_backend::domain::ports::{
    FixtureUserRegistration, FixtureUsersQuery, ItemGenerator, UserRegistration, UsersQuery,
};
use inventory_backend::domain::{UserRegistrationService, UsersQueryService};
use inventory_backend::inbound::http::state::HttpState;
use inventory_backend::outbound::items::CatalogueItemGenerator;
use inventory_backend::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Build handler state from the configuration.
///
/// Uses the Diesel repository when a pool is configured and fixture ports
/// otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (users, registration): (Arc<dyn UsersQuery>, Arc<dyn UserRegistration>) =
        match &config.db_pool {
            Some(pool) => {
                let repository = Arc::new(DieselUserRepository::new(pool.clone()));
                let items: Arc<dyn ItemGenerator> = config
                    .item_generator
                    .clone()
                    .unwrap_or_else(|| Arc::new(CatalogueItemGenerator::default()));
                (
                    Arc::new(UsersQueryService::new(repository.clone())),
                    Arc::new(UserRegistrationService::new(repository, items)),
                )
            }
            None => (
                Arc::new(FixtureUsersQuery),
                Arc::new(FixtureUserRegistration),
            ),
        };
    web::Data::new(HttpState::new(users, registration))
}
