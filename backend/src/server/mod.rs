//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use inventory_backend::Trace;
use inventory_backend::inbound::http::health::{HealthState, live, ready};
use inventory_backend::inbound::http::state::HttpState;
use inventory_backend::inbound::http::users;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(users::configure)
}

/// Construct the Actix HTTP server.
///
/// The health state is marked ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
