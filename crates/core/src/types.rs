//! Core type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One observed price for an item at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub price: f64,
    pub unit: String,
    pub location: String,
    pub last_updated: DateTime<Utc>,
}

impl PriceRecord {
    pub fn new(price: f64, unit: &str, location: &str, last_updated: DateTime<Utc>) -> Self {
        Self {
            price,
            unit: unit.to_string(),
            location: location.to_string(),
            last_updated,
        }
    }
}

/// Where a resolved price came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    /// Stored catalog entry
    #[default]
    Catalog,
    /// Synthesized fallback
    Default,
}

impl PriceSource {
    pub fn name(&self) -> &'static str {
        match self {
            PriceSource::Catalog => "catalog",
            PriceSource::Default => "default",
        }
    }
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of a single price lookup.
///
/// `source` is kept out of the JSON body so the wire shape matches what
/// existing clients already parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPrice {
    pub vegetable: String,
    pub price: f64,
    pub unit: String,
    pub location: String,
    pub last_updated: DateTime<Utc>,
    pub currency: String,
    #[serde(skip)]
    pub source: PriceSource,
}

impl ResolvedPrice {
    /// Tag a stored record with the requested item name
    pub fn from_record(vegetable: &str, record: &PriceRecord, currency: &str) -> Self {
        Self {
            vegetable: vegetable.to_string(),
            price: record.price,
            unit: record.unit.clone(),
            location: record.location.clone(),
            last_updated: record.last_updated,
            currency: currency.to_string(),
            source: PriceSource::Catalog,
        }
    }

    pub fn is_default(&self) -> bool {
        self.source == PriceSource::Default
    }

    /// Listing form, without the timestamp
    pub fn to_listing(&self) -> VegetablePrice {
        VegetablePrice {
            vegetable: self.vegetable.clone(),
            price: self.price,
            unit: self.unit.clone(),
            location: self.location.clone(),
            currency: self.currency.clone(),
        }
    }
}

/// Entry in a per-location price listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VegetablePrice {
    pub vegetable: String,
    pub price: f64,
    pub unit: String,
    pub location: String,
    pub currency: String,
}

/// Aggregate statistics for one location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSummary {
    pub location: String,
    pub total_vegetables: usize,
    pub average_price: f64,
    pub currency: String,
    pub unit: String,
    pub vegetables: Vec<VegetablePrice>,
    pub timestamp: DateTime<Utc>,
}

/// Known item names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VegetablesResponse {
    pub vegetables: Vec<String>,
    pub total: usize,
}

/// Known locations plus the location used when none is given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
    pub default: String,
    pub total: usize,
}

/// Batch lookup payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPriceRequest {
    #[serde(default)]
    pub vegetables: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// One day of the illustrative price history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryPoint {
    pub date: String,
    pub tomato: f64,
    pub onion: f64,
    pub potato: f64,
}

/// Liveness payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub time: String,
    pub service: String,
}
