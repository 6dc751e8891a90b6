//! Quote assembly: provider bars, moving averages, catalog metadata.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use crate::common::math::round2;
use crate::db::CompanyStore;
use crate::error::ApiError;
use crate::indicators::trend::{latest_sma, sma_series};
use crate::models::{DerivedBar, IndicatorSummary, StockQuote};
use crate::services::market_data::MarketDataProvider;

/// Calendar days fetched per quote. Wide enough that the 200-day SMA is
/// defined for the most recent trading day of a display year despite
/// weekends and holidays thinning the series.
pub const FETCH_WINDOW_DAYS: i64 = 400;

pub const SMA_SHORT_WINDOW: usize = 50;
pub const SMA_LONG_WINDOW: usize = 200;

pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
    catalog: Arc<dyn CompanyStore>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, catalog: Arc<dyn CompanyStore>) -> Self {
        Self { provider, catalog }
    }

    /// Assemble the full quote document for `symbol`: the fetched bar
    /// series with SMA columns, the metrics snapshot, and the latest
    /// defined value of each SMA.
    pub async fn get_quote(&self, symbol: &str) -> Result<StockQuote, ApiError> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(FETCH_WINDOW_DAYS);

        let bars = self.provider.fetch_daily_bars(symbol, start, end).await?;
        if bars.is_empty() {
            return Err(ApiError::NotFound(format!(
                "No data available for {symbol}. Try a different stock."
            )));
        }

        info!(symbol = %symbol, bars = bars.len(), "Quote: fetched daily bars for {}", symbol);

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let sma_50 = sma_series(&closes, SMA_SHORT_WINDOW);
        let sma_200 = sma_series(&closes, SMA_LONG_WINDOW);

        let indicators = IndicatorSummary {
            sma_50: latest_sma(&sma_50).map(round2),
            sma_200: latest_sma(&sma_200).map(round2),
        };

        // The whole fetched range goes out, warm-up bars included.
        let data: Vec<DerivedBar> = bars
            .iter()
            .zip(sma_50.iter().zip(sma_200.iter()))
            .map(|(bar, (s50, s200))| DerivedBar {
                date: bar.date,
                open: round2(bar.open),
                high: round2(bar.high),
                low: round2(bar.low),
                close: round2(bar.close),
                volume: bar.volume,
                sma_50: s50.map(round2),
                sma_200: s200.map(round2),
            })
            .collect();

        let name = match self.catalog.get_by_symbol(symbol)? {
            Some(company) => company.name,
            None => symbol.to_string(),
        };

        let metrics = self.provider.fetch_metrics(symbol).await?;

        Ok(StockQuote {
            symbol: symbol.to_string(),
            name,
            data,
            metrics,
            indicators,
        })
    }
}
