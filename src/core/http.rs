//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::db::{self, CompanyStore, SqliteCompanyStore};
use crate::error::ApiError;
use crate::metrics::Metrics;
use crate::models::{Company, Exchange, StockQuote};
use crate::quotes::QuoteService;
use crate::services::market_data::MarketDataProvider;
use crate::services::YahooProvider;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub catalog: Arc<dyn CompanyStore>,
    pub quotes: Arc<QuoteService>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "stockboard-api"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct CompanyQuery {
    exchange: Option<Exchange>,
}

/// List the company catalog, optionally narrowed to one exchange
async fn list_companies(
    State(state): State<AppState>,
    Query(params): Query<CompanyQuery>,
) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = state.catalog.list(params.exchange).map_err(|e| {
        error!(error = %e, "Failed to list companies");
        e
    })?;

    Ok(Json(companies))
}

/// Full quote document for one symbol
async fn get_stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<StockQuote>, ApiError> {
    let start = Instant::now();
    state.metrics.quote_fetches_total.inc();

    let result = state.quotes.get_quote(&symbol).await;
    state
        .metrics
        .quote_fetch_duration_seconds
        .observe(start.elapsed().as_secs_f64());

    match result {
        Ok(quote) => Ok(Json(quote)),
        Err(ApiError::NotFound(msg)) => {
            info!(symbol = %symbol, "Quote: no data for {}", symbol);
            Err(ApiError::NotFound(msg))
        }
        Err(e) => {
            state.metrics.quote_fetch_failures_total.inc();
            error!(error = %e, symbol = %symbol, "Failed to build stock quote");
            Err(e)
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/companies", get(list_companies))
        .route("/stock/{symbol}", get(get_stock))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());

    let db_path = crate::config::get_catalog_db_path();
    let catalog: Arc<dyn CompanyStore> = Arc::new(SqliteCompanyStore::open(&db_path)?);
    db::initialize(catalog.as_ref())?;
    info!(path = %db_path, "Catalog store ready at {}", db_path);

    let provider: Arc<dyn MarketDataProvider> = Arc::new(YahooProvider::new(
        crate::config::get_yahoo_base_url(),
        crate::config::get_yahoo_auth_url(),
    ));
    let quotes = Arc::new(QuoteService::new(provider, catalog.clone()));

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics: metrics.clone(),
        start_time: start_time.clone(),
        catalog,
        quotes,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
