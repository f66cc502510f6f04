//! Band Gantt HTTP Server Binary
//!
//! Loads configuration, creates the metadata source, sets up the HTTP
//! router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Against the public MusicBrainz server (default)
//! cargo run --bin band-gantt-server
//!
//! # Offline, from a fixture file
//! SOURCE_TYPE=local GANTT_CONFIG=backend/gantt.toml cargo run --bin band-gantt-server
//! ```
//!
//! # Environment Variables
//!
//! - `GANTT_CONFIG`: Path to the TOML config (default: search for `gantt.toml`)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SOURCE_TYPE`: `musicbrainz` or `local`
//! - `MUSICBRAINZ_URL`, `MUSICBRAINZ_USER_AGENT`, `MUSICBRAINZ_TIMEOUT_SECS`
//! - `PALETTE_POLICY`: `compatible` or `cyclic`
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use band_gantt::config::AppConfig;
use band_gantt::http::{create_router, AppState};
use band_gantt::metadata::SourceFactory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Band Gantt HTTP Server");

    let config = AppConfig::load()?;
    let source = SourceFactory::from_config(&config)?;
    info!(source = source.name(), "Metadata source initialized");

    let state = AppState::from_config(source, &config);
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
