//! Illustrative price history
//!
//! A fixed week of tomato/onion/potato prices for chart rendering. Nothing
//! here is recorded from live lookups.

use vegprice_core::PriceHistoryPoint;

const HISTORY: [(&str, f64, f64, f64); 7] = [
    ("2024-06-01", 24.0, 40.0, 33.0),
    ("2024-06-02", 25.0, 42.0, 34.0),
    ("2024-06-03", 27.0, 41.0, 35.0),
    ("2024-06-04", 26.0, 43.0, 35.0),
    ("2024-06-05", 25.0, 44.0, 34.0),
    ("2024-06-06", 28.0, 42.0, 36.0),
    ("2024-06-07", 25.0, 42.0, 35.0),
];

/// Oldest first
pub fn price_history() -> Vec<PriceHistoryPoint> {
    HISTORY
        .iter()
        .map(|&(date, tomato, onion, potato)| PriceHistoryPoint {
            date: date.to_string(),
            tomato,
            onion,
            potato,
        })
        .collect()
}
