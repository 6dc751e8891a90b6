//! Unit tests for quote response serialization

use chrono::NaiveDate;
use serde_json::json;
use stockboard::models::{DerivedBar, IndicatorSummary, StockMetrics, StockQuote};

const METRIC_KEYS: [&str; 7] = [
    "52_week_high",
    "52_week_low",
    "avg_volume",
    "pe_ratio",
    "market_cap",
    "dividend_yield",
    "current_price",
];

#[test]
fn test_metrics_serialize_under_numeric_keys() {
    let metrics = StockMetrics {
        week_52_high: Some(110.5),
        week_52_low: Some(80.25),
        avg_volume: Some(1_250_000),
        pe_ratio: Some(24.5),
        market_cap: Some(5_000_000_000),
        dividend_yield: Some(0.0125),
        current_price: Some(101.35),
    };

    let value = serde_json::to_value(&metrics).unwrap();
    assert_eq!(value["52_week_high"], json!(110.5));
    assert_eq!(value["52_week_low"], json!(80.25));
    assert_eq!(value["avg_volume"], json!(1_250_000));
    assert_eq!(value["pe_ratio"], json!(24.5));
    assert_eq!(value["market_cap"], json!(5_000_000_000_u64));
    assert_eq!(value["dividend_yield"], json!(0.0125));
    assert_eq!(value["current_price"], json!(101.35));
}

#[test]
fn test_missing_metrics_serialize_as_explicit_nulls() {
    let value = serde_json::to_value(StockMetrics::default()).unwrap();
    let object = value.as_object().unwrap();

    for key in METRIC_KEYS {
        assert!(object.contains_key(key), "missing key {key}");
        assert!(object[key].is_null(), "{key} should be null");
    }
}

#[test]
fn test_bar_date_serializes_as_iso_day() {
    let bar = DerivedBar {
        date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        open: 100.0,
        high: 102.5,
        low: 99.25,
        close: 101.75,
        volume: 125_000,
        sma_50: Some(98.6),
        sma_200: None,
    };

    let value = serde_json::to_value(&bar).unwrap();
    assert_eq!(value["date"], json!("2024-03-05"));
    assert_eq!(value["close"], json!(101.75));
    assert_eq!(value["volume"], json!(125_000));
    assert_eq!(value["sma_50"], json!(98.6));
    assert!(value["sma_200"].is_null());
}

#[test]
fn test_indicator_summary_keeps_undefined_averages_null() {
    let summary = IndicatorSummary {
        sma_50: Some(104.2),
        sma_200: None,
    };

    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["sma_50"], json!(104.2));
    assert!(value["sma_200"].is_null());
}

#[test]
fn test_stock_quote_document_shape() {
    let quote = StockQuote {
        symbol: "TCS.BO".to_string(),
        name: "Tata Consultancy Services".to_string(),
        data: vec![],
        metrics: StockMetrics::default(),
        indicators: IndicatorSummary {
            sma_50: None,
            sma_200: None,
        },
    };

    let value = serde_json::to_value(&quote).unwrap();
    assert_eq!(value["symbol"], json!("TCS.BO"));
    assert_eq!(value["name"], json!("Tata Consultancy Services"));
    assert!(value["data"].as_array().unwrap().is_empty());
    assert!(value["metrics"].is_object());
    assert!(value["indicators"]["sma_50"].is_null());
    assert!(value["indicators"]["sma_200"].is_null());
}
