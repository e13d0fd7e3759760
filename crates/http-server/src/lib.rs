//! HTTP server for the vegetable price service
//!
//! Thin JSON front end over the price catalog; no pricing decisions live here.

pub mod error;
pub mod server;
pub mod service;
pub mod telemetry;

pub use error::{ApiError, ApiResult};
pub use server::{HttpServer, HttpServerBuilder};
pub use service::{app_router, AppState};
