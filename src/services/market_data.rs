//! Market data provider interface.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{PriceBar, StockMetrics};

/// Failures surfaced by a market data provider.
#[derive(Debug)]
pub enum ProviderError {
    /// The provider has no bars for this symbol over the requested range
    NoData(String),
    Request(String),
    Status(u16, String),
    Decode(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData(symbol) => write!(f, "no data for symbol {symbol}"),
            Self::Request(msg) => write!(f, "request failed: {msg}"),
            Self::Status(code, msg) => write!(f, "unexpected status {code}: {msg}"),
            Self::Decode(msg) => write!(f, "malformed payload: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e.to_string())
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily OHLCV bars for `symbol` over `[start, end]`, ascending by date.
    /// An unknown symbol or an empty range surfaces as `NoData`.
    async fn fetch_daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, ProviderError>;

    /// Point-in-time descriptive metrics for `symbol`
    async fn fetch_metrics(&self, symbol: &str) -> Result<StockMetrics, ProviderError>;
}
