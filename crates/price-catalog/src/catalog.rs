//! Immutable price catalog
//!
//! Built once at startup and only read afterwards, so it is shared behind an
//! `Arc` with no locking.

use std::collections::BTreeMap;

use vegprice_core::{CatalogError, CatalogResult, PriceRecord};

/// Item name -> location -> record
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Prices indexed by item, then location
    prices: BTreeMap<String, BTreeMap<String, PriceRecord>>,

    /// Supported locations in display order
    locations: Vec<String>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Exact, case-sensitive match on both keys
    pub fn lookup(&self, item: &str, location: &str) -> Option<&PriceRecord> {
        self.prices.get(item).and_then(|locations| locations.get(location))
    }

    /// Item names in ascending order
    pub fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.prices.keys().map(String::as_str)
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            item_count: self.prices.len(),
            location_count: self.locations.len(),
            record_count: self.prices.values().map(BTreeMap::len).sum(),
        }
    }
}

/// Statistics about catalog contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub item_count: usize,
    pub location_count: usize,
    pub record_count: usize,
}

/// Validating builder for [`Catalog`]
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    records: Vec<(String, PriceRecord)>,
    locations: Option<Vec<String>>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the advertised location list. When unset, locations are taken
    /// from the records in first-seen order.
    pub fn locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = Some(locations.into_iter().map(Into::into).collect());
        self
    }

    pub fn record(mut self, item: impl Into<String>, record: PriceRecord) -> Self {
        self.records.push((item.into(), record));
        self
    }

    pub fn build(self) -> CatalogResult<Catalog> {
        let mut prices: BTreeMap<String, BTreeMap<String, PriceRecord>> = BTreeMap::new();
        let mut seen_locations: Vec<String> = Vec::new();

        for (item, record) in self.records {
            if item.is_empty() {
                return Err(CatalogError::EmptyItemName);
            }
            if record.price < 0.0 || record.price.is_nan() {
                return Err(CatalogError::InvalidPrice {
                    item,
                    location: record.location,
                    price: record.price,
                });
            }
            if !seen_locations.contains(&record.location) {
                seen_locations.push(record.location.clone());
            }

            // Keyed by the record's own location, so the two never diverge
            prices
                .entry(item)
                .or_default()
                .insert(record.location.clone(), record);
        }

        Ok(Catalog {
            prices,
            locations: self.locations.unwrap_or(seen_locations),
        })
    }
}
