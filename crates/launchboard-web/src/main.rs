//! Launchboard Web Server
//!
//! Run with: cargo run -p launchboard-web

use std::net::SocketAddr;

use anyhow::Context;
use launchboard_data::LaunchTable;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = launchboard_web::config::Config::load()?;

    info!("Starting Launchboard Web Server...");

    // Load the launch table once; any failure here is fatal.
    let table = LaunchTable::load_csv(&config.dataset.path)
        .with_context(|| format!("Failed to load launch dataset from {}", config.dataset.path))?;
    info!(
        "Dataset ready: {} records, {} launch sites",
        table.len(),
        table.all_sites().len()
    );

    let state = launchboard_web::state::AppState::new(table);
    let app = launchboard_web::router::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| "Invalid server address in config")?;
    info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
