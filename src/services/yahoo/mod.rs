//! Yahoo Finance market data provider.
//!
//! Daily bars come from the chart endpoint; descriptive metrics come from
//! quoteSummary, which requires Yahoo's crumb/cookie handshake.

pub mod messages;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime};
use reqwest::header;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::models::{PriceBar, StockMetrics};
use crate::services::market_data::{MarketDataProvider, ProviderError};

use messages::{ChartResponse, QuoteSummaryResponse, RawNumber};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const QUOTE_SUMMARY_MODULES: &str = "price,summaryDetail,financialData";

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

/// Market data provider backed by the public Yahoo Finance endpoints.
pub struct YahooProvider {
    client: reqwest::Client,
    base_url: String,
    auth_url: String,
    crumb: RwLock<Option<CrumbData>>,
}

impl YahooProvider {
    pub fn new(base_url: String, auth_url: String) -> Self {
        Self::with_client(base_url, auth_url, reqwest::Client::new())
    }

    /// Build a provider against explicit endpoints. Tests point both URLs
    /// at a mock server.
    pub fn with_client(base_url: String, auth_url: String, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url,
            auth_url,
            crumb: RwLock::new(None),
        }
    }

    /// Return the cached crumb, fetching one on first use.
    async fn ensure_crumb(&self) -> Result<CrumbData, ProviderError> {
        {
            let guard = self.crumb.read().await;
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Run the crumb handshake: a cookie from the auth host, then the
    /// crumb token tied to that cookie.
    async fn fetch_crumb(&self) -> Result<CrumbData, ProviderError> {
        let response = self.client.get(&self.auth_url).send().await?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| {
                ProviderError::Decode("auth endpoint sent no usable cookie".to_string())
            })?;

        let crumb = self
            .client
            .get(format!("{}/v1/test/getcrumb", self.base_url))
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await?
            .text()
            .await?;

        if crumb.is_empty() {
            return Err(ProviderError::Decode("crumb endpoint sent an empty token".to_string()));
        }

        let crumb_data = CrumbData { cookie, crumb };

        let mut guard = self.crumb.write().await;
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    async fn clear_crumb(&self) {
        let mut guard = self.crumb.write().await;
        *guard = None;
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn fetch_daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, ProviderError> {
        let period1 = unix_midnight(start);
        let period2 = unix_midnight(end) + 86_400; // end day inclusive

        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url, symbol, period1, period2
        );

        debug!(symbol = %symbol, "Yahoo: requesting daily bars for {}", symbol);

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::NoData(symbol.to_string()));
        }
        if !response.status().is_success() {
            return Err(ProviderError::Status(
                response.status().as_u16(),
                format!("chart request for {symbol}"),
            ));
        }

        let payload: ChartResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let series = payload
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| ProviderError::NoData(symbol.to_string()))?;

        let quote = series.indicators.quote.into_iter().next().unwrap_or_default();

        let mut bars = Vec::with_capacity(series.timestamp.len());
        for (i, ts) in series.timestamp.iter().enumerate() {
            let date = match DateTime::from_timestamp(*ts, 0) {
                Some(dt) => dt.date_naive(),
                None => continue,
            };

            let open = quote.open.get(i).copied().flatten();
            let high = quote.high.get(i).copied().flatten();
            let low = quote.low.get(i).copied().flatten();
            let close = quote.close.get(i).copied().flatten();

            let (open, high, low, close) = match (open, high, low, close) {
                (Some(o), Some(h), Some(l), Some(c)) => (o, h, l, c),
                _ => {
                    debug!(symbol = %symbol, date = %date, "Yahoo: skipping bar with null values");
                    continue;
                }
            };

            bars.push(PriceBar {
                date,
                open,
                high,
                low,
                close,
                volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
            });
        }

        if bars.is_empty() {
            return Err(ProviderError::NoData(symbol.to_string()));
        }

        Ok(bars)
    }

    async fn fetch_metrics(&self, symbol: &str) -> Result<StockMetrics, ProviderError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}&crumb={}",
            self.base_url, symbol, QUOTE_SUMMARY_MODULES, crumb.crumb
        );

        debug!(symbol = %symbol, "Yahoo: requesting quote summary for {}", symbol);

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb().await;
            return Err(ProviderError::Status(
                401,
                format!("authentication expired during quote summary for {symbol}"),
            ));
        }

        // quoteSummary 404s for symbols it does not know; the response
        // contract keeps those metrics null rather than failing the quote.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            warn!(symbol = %symbol, "Yahoo: no quote summary for {}", symbol);
            return Ok(StockMetrics::default());
        }
        if !response.status().is_success() {
            return Err(ProviderError::Status(
                response.status().as_u16(),
                format!("quote summary request for {symbol}"),
            ));
        }

        let payload: QuoteSummaryResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let result = match payload.quote_summary.result.and_then(|r| r.into_iter().next()) {
            Some(result) => result,
            None => {
                warn!(symbol = %symbol, "Yahoo: empty quote summary for {}", symbol);
                return Ok(StockMetrics::default());
            }
        };

        let detail = result.summary_detail.unwrap_or_default();
        let financial = result.financial_data.unwrap_or_default();

        Ok(StockMetrics {
            week_52_high: raw(detail.fifty_two_week_high),
            week_52_low: raw(detail.fifty_two_week_low),
            avg_volume: raw(detail.average_volume).map(|v| v as u64),
            pe_ratio: raw(detail.trailing_pe),
            market_cap: raw(detail.market_cap).map(|v| v as u64),
            dividend_yield: raw(detail.dividend_yield),
            current_price: raw(financial.current_price),
        })
    }
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

fn raw(value: Option<RawNumber>) -> Option<f64> {
    value.and_then(|v| v.raw)
}
