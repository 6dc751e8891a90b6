//! Quote response data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLCV bar as fetched from the data provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// A price bar extended with trailing moving averages. The SMA columns
/// stay null until enough preceding bars exist for the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
}

/// Point-in-time descriptive statistics for a symbol. Metrics the
/// provider does not supply serialize as explicit nulls, never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockMetrics {
    #[serde(rename = "52_week_high")]
    pub week_52_high: Option<f64>,
    #[serde(rename = "52_week_low")]
    pub week_52_low: Option<f64>,
    pub avg_volume: Option<u64>,
    pub pe_ratio: Option<f64>,
    pub market_cap: Option<u64>,
    pub dividend_yield: Option<f64>,
    pub current_price: Option<f64>,
}

/// Latest defined value of each moving-average series, taken
/// independently per window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSummary {
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
}

/// Full quote document served for a single symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub data: Vec<DerivedBar>,
    pub metrics: StockMetrics,
    pub indicators: IndicatorSummary,
}
