use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use codeconnect::config::Config;
use codeconnect::database;
use codeconnect::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();
    info!(database_url = %config.database_url, "connecting to database");

    let pool = match database::connect(&config.database_url, config.database_max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Cannot open database {}: {}", config.database_url, e);
            std::process::exit(1);
        }
    };

    let app = web::router(pool);

    // Fall back to the next port when the configured one is taken.
    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = format!("{}:{}", config.host, config.port.saturating_add(1));
            warn!("Cannot bind {}: {}. Trying fallback {}", config.bind_addr(), e, fallback);
            match tokio::net::TcpListener::bind(&fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!("Cannot bind fallback {}: {}", fallback, e);
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!("🚀 Server running on http://{}", addr),
        Err(e) => warn!("Listening, but local address is unknown: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
