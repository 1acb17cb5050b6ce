use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, storage_config::init_repository};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Loads configuration, selects the product store, wires the use cases and
/// starts the HTTP server.
///
/// - config/: server, CORS and storage settings from the environment
/// - setup/: dependency wiring and server startup
/// - api/: route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (RUST_LOG may come from .env)
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize the product store
    let repository = init_repository(&config.storage).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(repository, config.storage.backend_name());

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
