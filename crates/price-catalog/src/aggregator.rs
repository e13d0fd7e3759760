//! Price aggregator - multi-item views built on the resolver

use chrono::Utc;
use tracing::debug;

use vegprice_core::{
    LocationsResponse, MarketSummary, ResolvedPrice, VegetablePrice, VegetablesResponse,
};

use crate::resolver::PriceResolver;

/// Listing, summary and batch views over the catalog.
///
/// Every item goes through [`PriceResolver`]; listings drop defaulted
/// results while batch lookups keep them.
#[derive(Debug, Clone)]
pub struct PriceAggregator {
    resolver: PriceResolver,
}

impl PriceAggregator {
    pub fn new(resolver: PriceResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &PriceResolver {
        &self.resolver
    }

    /// Single lookup, with fallback
    pub fn price(&self, item: &str, location: Option<&str>) -> ResolvedPrice {
        self.resolver.resolve(item, location)
    }

    /// Known prices at a location. Items without a catalog entry there are
    /// omitted, never defaulted.
    pub fn list_prices(&self, location: Option<&str>) -> Vec<VegetablePrice> {
        let location = self.resolver.effective_location(location);
        self.collect_known(location)
    }

    /// Count and mean of the known prices at a location
    pub fn market_summary(&self, location: Option<&str>) -> MarketSummary {
        let location = self.resolver.effective_location(location);
        let vegetables = self.collect_known(location);

        let total = vegetables.len();
        let average_price = if total == 0 {
            0.0
        } else {
            vegetables.iter().map(|v| v.price).sum::<f64>() / total as f64
        };

        debug!(
            "Market summary for {}: {} items, average {:.2}",
            location, total, average_price
        );

        let config = self.resolver.config();
        MarketSummary {
            location: location.to_string(),
            total_vegetables: total,
            average_price,
            currency: config.currency.clone(),
            unit: config.fallback_unit.clone(),
            vegetables,
            timestamp: Utc::now(),
        }
    }

    /// Resolve every requested item at one location, in input order.
    /// Unknown items get the fallback price; duplicates are kept.
    pub fn batch_prices<S: AsRef<str>>(
        &self,
        items: &[S],
        location: Option<&str>,
    ) -> Vec<ResolvedPrice> {
        let location = self.resolver.effective_location(location);

        items
            .iter()
            .map(|item| self.resolver.resolve_at(item.as_ref(), location))
            .collect()
    }

    /// Every item name in the catalog
    pub fn vegetables(&self) -> VegetablesResponse {
        let vegetables: Vec<String> = self
            .resolver
            .catalog()
            .items()
            .map(str::to_string)
            .collect();

        VegetablesResponse {
            total: vegetables.len(),
            vegetables,
        }
    }

    /// Supported locations plus the default
    pub fn locations(&self) -> LocationsResponse {
        let locations = self.resolver.catalog().locations().to_vec();

        LocationsResponse {
            total: locations.len(),
            locations,
            default: self.resolver.config().default_location.clone(),
        }
    }

    fn collect_known(&self, location: &str) -> Vec<VegetablePrice> {
        self.resolver
            .catalog()
            .items()
            .map(|item| self.resolver.resolve_at(item, location))
            .filter(|resolved| !resolved.is_default())
            .map(|resolved| resolved.to_listing())
            .collect()
    }
}
