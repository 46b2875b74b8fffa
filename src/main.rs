// translate-relay - HTTP relay in front of a machine-translation provider
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use translate_relay::cli::Args;
use translate_relay::config::AppConfig;
use translate_relay::provider::GoogleTranslateClient;
use translate_relay::server::create_router;
use translate_relay::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments (PORT is read here)
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load(&args)?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting translate-relay v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the provider client (serves both detection and translation)
    let client = Arc::new(GoogleTranslateClient::new(&config.provider)?);
    info!("Translation provider: {}", client.base_url());

    // Phase 4: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, client.clone(), client);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
