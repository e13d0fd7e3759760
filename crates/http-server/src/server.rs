//! HTTP server configuration and startup

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Utc;
use tokio::net::TcpListener;
use tracing::info;

use vegprice_catalog::{Catalog, PriceAggregator, PriceResolver};
use vegprice_core::{PricingConfig, ServerConfig};

use crate::service::{app_router, AppState};

/// HTTP server wrapper
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    pub fn new(config: ServerConfig, aggregator: PriceAggregator) -> Self {
        Self {
            config,
            state: AppState::new(aggregator),
        }
    }

    /// Get reference to the shared state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Start with graceful shutdown
    pub async fn start_with_shutdown(
        &self,
        shutdown: tokio::sync::oneshot::Receiver<()>,
    ) -> anyhow::Result<()> {
        let addr: SocketAddr = self.address().parse()?;
        let listener = TcpListener::bind(addr).await?;

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        axum::serve(listener, app_router(self.state.clone()))
            .with_graceful_shutdown(async {
                shutdown.await.ok();
                info!("Shutdown signal received");
            })
            .await?;

        Ok(())
    }

    /// Get server address
    pub fn address(&self) -> String {
        self.config.address()
    }
}

/// Builder for server configuration
pub struct HttpServerBuilder {
    config: ServerConfig,
    pricing: PricingConfig,
    catalog: Option<Catalog>,
}

impl HttpServerBuilder {
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            pricing: PricingConfig::default(),
            catalog: None,
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Falls back to the seeded catalog when none was given. The pricing
    /// policy must be valid and its default location served by the catalog.
    pub fn build(self) -> anyhow::Result<HttpServer> {
        self.pricing.validate()?;

        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Catalog::seeded(Utc::now())?,
        };
        self.pricing.validate_locations(catalog.locations())?;

        let stats = catalog.stats();
        info!(
            "Catalog loaded: {} items, {} locations, {} prices",
            stats.item_count, stats.location_count, stats.record_count
        );

        let resolver = PriceResolver::new(Arc::new(catalog), self.pricing);
        Ok(HttpServer::new(self.config, PriceAggregator::new(resolver)))
    }
}

impl Default for HttpServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
