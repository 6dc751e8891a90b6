//! Prometheus metrics registry.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Opts, Registry, TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
    pub quote_fetches_total: IntCounter,
    pub quote_fetch_failures_total: IntCounter,
    pub quote_fetch_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounter::with_opts(Opts::new(
            "http_requests_total",
            "Total number of HTTP requests handled",
        ))?;
        let http_requests_in_flight = IntGauge::with_opts(Opts::new(
            "http_requests_in_flight",
            "HTTP requests currently being handled",
        ))?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let quote_fetches_total = IntCounter::with_opts(Opts::new(
            "quote_fetches_total",
            "Total number of stock quote lookups",
        ))?;
        let quote_fetch_failures_total = IntCounter::with_opts(Opts::new(
            "quote_fetch_failures_total",
            "Stock quote lookups that ended in an error",
        ))?;
        let quote_fetch_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "quote_fetch_duration_seconds",
            "Stock quote lookup latency in seconds",
        ))?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(quote_fetches_total.clone()))?;
        registry.register(Box::new(quote_fetch_failures_total.clone()))?;
        registry.register(Box::new(quote_fetch_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            quote_fetches_total,
            quote_fetch_failures_total,
            quote_fetch_duration_seconds,
        })
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
