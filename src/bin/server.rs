//! GradPlan HTTP Server Binary
//!
//! Entry point for the plan-generation REST API server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gradplan-server --features http-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (overrides gradplan.toml, default: 0.0.0.0)
//! - `PORT`: Server port (overrides gradplan.toml, default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gradplan_rust::config::ServerConfig;
use gradplan_rust::http::{create_router, AppState};

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
        .init();

    info!("Starting GradPlan HTTP Server");

    let config = ServerConfig::from_default_location()?;

    let app = create_router(AppState::new());

    let host = env::var("HOST").unwrap_or(config.server.host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
