use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, datamart_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, Firebase, datamart)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mappers
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration; a missing Firebase key stops here
    let config = AppConfig::from_env()?;

    // 4. Load the sales datamart
    let sales = datamart_config::init_datamart(&config.datamart).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config.firebase, sales);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
