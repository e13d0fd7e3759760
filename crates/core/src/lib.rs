//! Core types for the vegetable price service
//!
//! This crate provides shared types used across all components:
//! - Price records and resolved prices
//! - Listing, summary and enumeration payloads
//! - Pricing and server configuration

pub mod types;
pub mod config;
pub mod errors;

pub use types::*;
pub use config::*;
pub use errors::*;
