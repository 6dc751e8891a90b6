//! Test utilities for API server integration tests

use axum_test::TestServer;
use chrono::{Duration, NaiveTime, Utc};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use stockboard::core::http::{create_router, AppState, HealthStatus};
use stockboard::db::{self, CompanyStore, SqliteCompanyStore};
use stockboard::metrics::Metrics;
use stockboard::quotes::QuoteService;
use stockboard::services::market_data::MarketDataProvider;
use stockboard::services::yahoo::YahooProvider;
use tokio::sync::RwLock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test helper for API server integration tests. The provider points at a
/// wiremock server standing in for the Yahoo endpoints; tests mount the
/// chart and quoteSummary responses they need.
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub yahoo: MockServer,
}

impl TestApiServer {
    pub async fn new() -> Self {
        let yahoo = MockServer::start().await;
        mock_crumb_handshake(&yahoo).await;

        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));

        let catalog: Arc<dyn CompanyStore> =
            Arc::new(SqliteCompanyStore::open_in_memory().expect("open catalog store"));
        db::initialize(catalog.as_ref()).expect("seed catalog");

        let provider: Arc<dyn MarketDataProvider> = Arc::new(YahooProvider::with_client(
            yahoo.uri(),
            yahoo.uri(),
            reqwest::Client::new(),
        ));
        let quotes = Arc::new(QuoteService::new(provider, catalog.clone()));

        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            catalog,
            quotes,
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            metrics,
            yahoo,
        }
    }
}

/// Serve the cookie and crumb token the quoteSummary endpoint requires
pub async fn mock_crumb_handshake(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "A3=d=test-session; Path=/; Domain=.yahoo.com"),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/test/getcrumb"))
        .respond_with(ResponseTemplate::new(200).set_body_string("test-crumb"))
        .mount(server)
        .await;
}

/// Chart response with one daily bar per close, ending today. Opens, highs,
/// lows, and volumes are derived from the closes.
pub async fn mock_chart_success(server: &MockServer, symbol: &str, closes: &[f64]) {
    let today = Utc::now().date_naive();
    let first = today - Duration::days(closes.len() as i64 - 1);

    let timestamps: Vec<i64> = (0..closes.len() as i64)
        .map(|i| {
            (first + Duration::days(i))
                .and_time(NaiveTime::MIN)
                .and_utc()
                .timestamp()
        })
        .collect();
    let opens: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 2.0).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 2.0).collect();
    let volumes: Vec<u64> = (0..closes.len() as u64).map(|i| 1_000 + i * 100).collect();

    let response = json!({
        "chart": {
            "result": [{
                "meta": {"symbol": symbol},
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{
                        "open": opens,
                        "high": highs,
                        "low": lows,
                        "close": closes,
                        "volume": volumes
                    }]
                }
            }],
            "error": null
        }
    });

    Mock::given(method("GET"))
        .and(path(format!("/v8/finance/chart/{symbol}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

/// Chart response Yahoo sends for symbols it does not know
pub async fn mock_chart_not_found(server: &MockServer, symbol: &str) {
    let response = json!({
        "chart": {
            "result": null,
            "error": {
                "code": "Not Found",
                "description": "No data found, symbol may be delisted"
            }
        }
    });

    Mock::given(method("GET"))
        .and(path(format!("/v8/finance/chart/{symbol}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(response))
        .mount(server)
        .await;
}

pub async fn mock_chart_failure(server: &MockServer, symbol: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/v8/finance/chart/{symbol}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// quoteSummary response with a full set of descriptive metrics
pub async fn mock_quote_summary(server: &MockServer, symbol: &str) {
    let response = json!({
        "quoteSummary": {
            "result": [{
                "summaryDetail": {
                    "fiftyTwoWeekHigh": {"raw": 120.5, "fmt": "120.50"},
                    "fiftyTwoWeekLow": {"raw": 80.25, "fmt": "80.25"},
                    "averageVolume": {"raw": 2500000, "fmt": "2.5M"},
                    "trailingPE": {"raw": 24.5, "fmt": "24.50"},
                    "marketCap": {"raw": 5000000000u64, "fmt": "5B"},
                    "dividendYield": {"raw": 0.0125, "fmt": "1.25%"}
                },
                "financialData": {
                    "currentPrice": {"raw": 101.35, "fmt": "101.35"}
                }
            }],
            "error": null
        }
    });

    Mock::given(method("GET"))
        .and(path(format!("/v10/finance/quoteSummary/{symbol}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

/// quoteSummary response with a null result, as sent for unknown symbols
pub async fn mock_quote_summary_empty(server: &MockServer, symbol: &str) {
    let response = json!({
        "quoteSummary": {
            "result": null,
            "error": {"code": "Not Found", "description": "Quote not found"}
        }
    });

    Mock::given(method("GET"))
        .and(path(format!("/v10/finance/quoteSummary/{symbol}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

pub async fn mock_quote_summary_failure(server: &MockServer, symbol: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/v10/finance/quoteSummary/{symbol}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
