use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use vegprice_catalog::{Catalog, PriceAggregator, PriceResolver};
use vegprice_core::PricingConfig;
use vegprice_server::{app_router, AppState};

fn app() -> Router {
    let catalog = Catalog::seeded(Utc::now()).unwrap();
    let resolver = PriceResolver::new(Arc::new(catalog), PricingConfig::default());
    app_router(AppState::new(PriceAggregator::new(resolver)))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(request).await
}

#[tokio::test]
async fn test_get_price_from_catalog() {
    let (status, body) = get("/api/price/tomato?location=Delhi").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vegetable"], "tomato");
    assert_eq!(body["price"], 25.0);
    assert_eq!(body["unit"], "kg");
    assert_eq!(body["location"], "Delhi");
    assert_eq!(body["currency"], "INR");
    assert!(body["last_updated"].is_string());
    assert!(body.get("source").is_none());
}

#[tokio::test]
async fn test_get_price_fallback() {
    let (status, body) = get("/api/price/mango?location=Delhi").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vegetable"], "mango");
    assert_eq!(body["price"], 30.0);
    assert_eq!(body["unit"], "kg");
}

#[tokio::test]
async fn test_get_price_empty_location() {
    let (_, empty) = get("/api/price/onion?location=").await;
    let (_, missing) = get("/api/price/onion").await;

    assert_eq!(empty["location"], "Delhi");
    assert_eq!(empty["price"], 42.0);
    for field in ["vegetable", "price", "unit", "location", "currency"] {
        assert_eq!(missing[field], empty[field]);
    }
}

#[tokio::test]
async fn test_all_prices() {
    let (status, body) = get("/api/prices?location=Mumbai").await;

    assert_eq!(status, StatusCode::OK);
    let prices = body.as_array().unwrap();
    assert_eq!(prices.len(), 5);
    assert!(prices.iter().all(|p| p["location"] == "Mumbai"));
    assert!(prices.iter().all(|p| p.get("last_updated").is_none()));

    let (_, unknown) = get("/api/prices?location=Atlantis").await;
    assert_eq!(unknown, json!([]));
}

#[tokio::test]
async fn test_market_summary() {
    let (status, body) = get("/api/market-summary/Kolkata").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Kolkata");
    assert_eq!(body["total_vegetables"], 5);
    assert!((body["average_price"].as_f64().unwrap() - 33.2).abs() < 1e-9);
    assert_eq!(body["currency"], "INR");
    assert_eq!(body["unit"], "kg");
    assert_eq!(body["vegetables"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_market_summary_unknown_location() {
    let (_, body) = get("/api/market-summary/Atlantis").await;

    assert_eq!(body["total_vegetables"], 0);
    assert_eq!(body["average_price"], 0.0);
}

#[tokio::test]
async fn test_batch_prices() {
    let (status, body) = post_json(
        "/api/batch-prices",
        r#"{"vegetables":["tomato","kiwi"],"location":"Mumbai"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["vegetable"], "tomato");
    assert_eq!(results[0]["price"], 28.0);
    assert_eq!(results[1]["vegetable"], "kiwi");
    assert_eq!(results[1]["price"], 30.0);
    assert_eq!(results[1]["location"], "Mumbai");
}

#[tokio::test]
async fn test_batch_prices_default_location() {
    let (status, body) = post_json("/api/batch-prices", r#"{"vegetables":["carrot"]}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["location"], "Delhi");
    assert_eq!(body[0]["price"], 55.0);
}

#[tokio::test]
async fn test_batch_prices_malformed() {
    let (status, body) = post_json("/api/batch-prices", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_batch_prices_wrong_shape() {
    let (status, _) = post_json("/api/batch-prices", r#"{"vegetables":"tomato"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_enumerations() {
    let (_, vegetables) = get("/api/vegetables").await;
    assert_eq!(vegetables["total"], 5);
    assert_eq!(vegetables["vegetables"].as_array().unwrap().len(), 5);

    let (_, locations) = get("/api/locations").await;
    assert_eq!(locations["total"], 6);
    assert_eq!(locations["default"], "Delhi");
    assert_eq!(locations["locations"][0], "Delhi");
}

#[tokio::test]
async fn test_price_history() {
    let (status, body) = get("/api/price-history").await;

    assert_eq!(status, StatusCode::OK);
    let history = body.as_array().unwrap();
    assert_eq!(history.len(), 7);
    for point in history {
        assert!(point["date"].is_string());
        assert!(point["tomato"].is_number());
        assert!(point["onion"].is_number());
        assert!(point["potato"].is_number());
    }
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "vegprice-server");
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/batch-prices")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
