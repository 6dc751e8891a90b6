//! Environment-backed configuration accessors.

use std::env;

/// Deployment environment: "production" switches logging to JSON
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

/// Path of the SQLite file backing the company catalog
pub fn get_catalog_db_path() -> String {
    env::var("CATALOG_DB_PATH").unwrap_or_else(|_| "stocks.db".to_string())
}

/// Host serving the Yahoo chart and quoteSummary endpoints
pub fn get_yahoo_base_url() -> String {
    env::var("YAHOO_BASE_URL").unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string())
}

/// Host handing out the session cookie for the crumb handshake
pub fn get_yahoo_auth_url() -> String {
    env::var("YAHOO_AUTH_URL").unwrap_or_else(|_| "https://fc.yahoo.com".to_string())
}
