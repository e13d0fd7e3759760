//! Price resolution and aggregation engine
//!
//! Features:
//! - Immutable catalog built once at startup
//! - Single lookups with deterministic fallback pricing
//! - Per-location listings, market summaries and batch lookups
//! - Item and location enumeration

pub mod aggregator;
pub mod catalog;
pub mod history;
pub mod resolver;
pub mod seed;

pub use aggregator::PriceAggregator;
pub use catalog::{Catalog, CatalogBuilder, CatalogStats};
pub use history::price_history;
pub use resolver::PriceResolver;
