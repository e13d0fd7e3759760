//! Fixed startup price table

use chrono::{DateTime, Utc};

use vegprice_core::{CatalogResult, PriceRecord, DEFAULT_UNIT, KNOWN_LOCATIONS};

use crate::catalog::Catalog;

/// Per-kg prices, columns in `KNOWN_LOCATIONS` order
pub const SEED_PRICES: [(&str, [f64; 6]); 5] = [
    ("tomato", [25.0, 28.0, 26.0, 27.0, 24.0, 26.0]),
    ("onion", [42.0, 38.0, 40.0, 44.0, 36.0, 41.0]),
    ("potato", [35.0, 32.0, 33.0, 36.0, 30.0, 34.0]),
    ("carrot", [55.0, 52.0, 50.0, 58.0, 48.0, 53.0]),
    ("cauliflower", [30.0, 35.0, 32.0, 38.0, 28.0, 31.0]),
];

impl Catalog {
    /// Build the seeded catalog, stamping every record with `now`
    pub fn seeded(now: DateTime<Utc>) -> CatalogResult<Self> {
        SEED_PRICES
            .iter()
            .flat_map(|(item, prices)| {
                KNOWN_LOCATIONS
                    .iter()
                    .zip(prices.iter())
                    .map(move |(location, price)| {
                        (*item, PriceRecord::new(*price, DEFAULT_UNIT, location, now))
                    })
            })
            .fold(Catalog::builder().locations(KNOWN_LOCATIONS), |builder, (item, record)| {
                builder.record(item, record)
            })
            .build()
    }
}
