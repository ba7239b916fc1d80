//! Backend entry-point: wires the directory REST endpoints and docs.

mod server;

use actix_web::{HttpServer, web};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use server::ServerConfig;

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

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;

    #[cfg(feature = "example-data")]
    server::seed_demo_data(&config)?;

    let http_state = web::Data::new(server::build_directory_state(&config)?);
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        server::build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    server.run().await
}
