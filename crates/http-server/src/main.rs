//! Vegetable price service
//!
//! Main entry point for the HTTP server

use tokio::signal;
use tracing::{error, info};

use vegprice_core::AppConfig;
use vegprice_server::{telemetry::init_tracing, HttpServerBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting vegetable price service v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        "Default location {}, fallback {} {}/{}",
        config.pricing.default_location,
        config.pricing.fallback_price,
        config.pricing.currency,
        config.pricing.fallback_unit
    );

    let server = HttpServerBuilder::new()
        .config(config.server)
        .pricing(config.pricing)
        .build()?;

    // Setup shutdown channel
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to listen for Ctrl+C: {}", e);
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
                    error!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received Ctrl+C");
            }
            _ = terminate => {
                info!("Received termination signal");
            }
        }

        let _ = shutdown_tx.send(());
    });

    info!("HTTP server listening on {}", server.address());
    info!("Press Ctrl+C to shutdown");

    if let Err(e) = server.start_with_shutdown(shutdown_rx).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    info!("Server shutdown complete");
    Ok(())
}
