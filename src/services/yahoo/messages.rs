//! Wire formats for the Yahoo Finance chart and quoteSummary endpoints.

use serde::Deserialize;

/// Top-level envelope of `/v8/finance/chart/{symbol}`
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartSeries>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// One symbol's chart data: a timestamp column plus parallel OHLCV columns
#[derive(Debug, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
}

/// Parallel value columns, null slots mark days without a traded value
#[derive(Debug, Default, Deserialize)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

/// Top-level envelope of `/v10/finance/quoteSummary/{symbol}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    pub quote_summary: QuoteSummaryEnvelope,
}

/// `result` is null (with `error` set) for unknown symbols
#[derive(Debug, Deserialize)]
pub struct QuoteSummaryEnvelope {
    pub result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    pub summary_detail: Option<SummaryDetail>,
    pub financial_data: Option<FinancialData>,
}

/// Yahoo wraps every numeric as `{"raw": ..., "fmt": ...}` and sends `{}`
/// when the value is absent
#[derive(Debug, Default, Deserialize)]
pub struct RawNumber {
    pub raw: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetail {
    pub fifty_two_week_high: Option<RawNumber>,
    pub fifty_two_week_low: Option<RawNumber>,
    pub average_volume: Option<RawNumber>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<RawNumber>,
    pub market_cap: Option<RawNumber>,
    pub dividend_yield: Option<RawNumber>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    pub current_price: Option<RawNumber>,
}
