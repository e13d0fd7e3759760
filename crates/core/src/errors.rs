//! Error types

use thiserror::Error;

/// Catalog construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Invalid price for {item} at {location}: {price}")]
    InvalidPrice {
        item: String,
        location: String,
        price: f64,
    },

    #[error("Empty item name")]
    EmptyItemName,
}

/// Pricing configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingConfigError {
    #[error("Default location must not be empty")]
    EmptyDefaultLocation,

    #[error("Invalid fallback price: {0}")]
    InvalidFallbackPrice(f64),

    #[error("Default location {location} is not served by the catalog")]
    UnknownDefaultLocation { location: String },
}

/// Result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;
