//! REST API server for the trading dashboard.

use anyhow::Result;
use dash_server::config::Config;
use dash_server::server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    info!(
        "starting dash-server on {} (simulated gateway)",
        config.socket_addr_string()
    );

    server::run(config).await
}
