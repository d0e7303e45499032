use dotenvy::dotenv;

mod action;
mod client;
mod config;
mod web;

use config::app_config::DashboardConfig;
use web::server::Server;

/// Dashboard Entry Point
///
/// Serves the login form and the sales query pages, forwarding every query to
/// the REST API with the signed-in user's token.
///
/// - config/: Dashboard configuration (server, API URL, Firebase)
/// - client/: HTTP client for the sales API
/// - web/: Page handlers, templates and server setup
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration; a missing Firebase key stops here
    let config = DashboardConfig::from_env()?;

    // 4. Run server
    Server::run(config).await?;

    Ok(())
}
