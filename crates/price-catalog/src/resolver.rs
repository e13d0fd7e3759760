//! Single price resolution with default fallback

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use vegprice_core::{PriceSource, PricingConfig, ResolvedPrice};

use crate::catalog::Catalog;

/// Answers "what price does this item have at this location"
#[derive(Debug, Clone)]
pub struct PriceResolver {
    catalog: Arc<Catalog>,
    config: PricingConfig,
}

impl PriceResolver {
    pub fn new(catalog: Arc<Catalog>, config: PricingConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Location actually used for a request
    pub fn effective_location<'a>(&'a self, location: Option<&'a str>) -> &'a str {
        self.config.effective_location(location)
    }

    /// Resolve `item`, substituting the default location when `location` is
    /// missing or empty. Never fails: unknown items get the fallback price.
    pub fn resolve(&self, item: &str, location: Option<&str>) -> ResolvedPrice {
        let location = self.effective_location(location);
        self.resolve_at(item, location)
    }

    /// Resolve at an already-effective location
    pub fn resolve_at(&self, item: &str, location: &str) -> ResolvedPrice {
        self.find(item, location)
            .unwrap_or_else(|| self.fallback(item, location))
    }

    /// Catalog hit only, no fallback
    pub fn find(&self, item: &str, location: &str) -> Option<ResolvedPrice> {
        self.catalog
            .lookup(item, location)
            .map(|record| ResolvedPrice::from_record(item, record, &self.config.currency))
    }

    fn fallback(&self, item: &str, location: &str) -> ResolvedPrice {
        debug!("No catalog price for {} at {}, using fallback", item, location);

        ResolvedPrice {
            vegetable: item.to_string(),
            price: self.config.fallback_price,
            unit: self.config.fallback_unit.clone(),
            location: location.to_string(),
            last_updated: Utc::now(),
            currency: self.config.currency.clone(),
            source: PriceSource::Default,
        }
    }
}
