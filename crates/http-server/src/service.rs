//! Route handlers

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use vegprice_catalog::{price_history, PriceAggregator};
use vegprice_core::{
    BatchPriceRequest, HealthResponse, LocationsResponse, MarketSummary, PriceHistoryPoint,
    ResolvedPrice, VegetablePrice, VegetablesResponse,
};

use crate::error::ApiResult;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<PriceAggregator>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(aggregator: PriceAggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            start_time: Instant::now(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub location: Option<String>,
}

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/price/{vegetable}", get(get_price))
        .route("/api/prices", get(get_all_prices))
        .route("/api/vegetables", get(get_vegetables))
        .route("/api/locations", get(get_locations))
        .route("/api/market-summary/{location}", get(get_market_summary))
        .route("/api/batch-prices", post(get_batch_prices))
        .route("/api/price-history", get(get_price_history))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_price(
    State(state): State<AppState>,
    Path(vegetable): Path<String>,
    Query(query): Query<LocationQuery>,
) -> Json<ResolvedPrice> {
    let price = state.aggregator.price(&vegetable, query.location.as_deref());
    debug!(
        "Price for {} at {}: {} ({})",
        price.vegetable, price.location, price.price, price.source
    );
    Json(price)
}

async fn get_all_prices(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Json<Vec<VegetablePrice>> {
    Json(state.aggregator.list_prices(query.location.as_deref()))
}

async fn get_vegetables(State(state): State<AppState>) -> Json<VegetablesResponse> {
    Json(state.aggregator.vegetables())
}

async fn get_locations(State(state): State<AppState>) -> Json<LocationsResponse> {
    Json(state.aggregator.locations())
}

async fn get_market_summary(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Json<MarketSummary> {
    Json(state.aggregator.market_summary(Some(&location)))
}

async fn get_batch_prices(
    State(state): State<AppState>,
    payload: Result<Json<BatchPriceRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<ResolvedPrice>>> {
    let Json(request) = payload?;
    debug!("Batch lookup for {} items", request.vegetables.len());

    Ok(Json(state.aggregator.batch_prices(
        &request.vegetables,
        request.location.as_deref(),
    )))
}

async fn get_price_history() -> Json<Vec<PriceHistoryPoint>> {
    Json(price_history())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: format!(
            "Price service is running (uptime {}s)",
            state.start_time.elapsed().as_secs()
        ),
        time: Utc::now().to_rfc3339(),
        service: env!("CARGO_PKG_NAME").to_string(),
    })
}
