//! SQLite-backed company catalog.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use std::path::Path;
use std::str::FromStr;

use crate::error::ApiError;
use crate::models::{Company, Exchange};

pub type DbPool = Pool<SqliteConnectionManager>;

/// Catalog operations the API layers depend on. The store is read-mostly:
/// records are inserted once at startup and never updated or deleted.
pub trait CompanyStore: Send + Sync {
    /// Insert unless a record with the same symbol exists. Returns whether
    /// a row was written; a duplicate insert is a no-op, not an error.
    fn insert_if_absent(&self, company: &Company) -> Result<bool, ApiError>;

    /// All records in insertion order, optionally narrowed to one exchange.
    fn list(&self, exchange: Option<Exchange>) -> Result<Vec<Company>, ApiError>;

    /// The record with this exact symbol, None when unregistered.
    fn get_by_symbol(&self, symbol: &str) -> Result<Option<Company>, ApiError>;
}

/// Company catalog backed by an embedded SQLite database.
pub struct SqliteCompanyStore {
    pool: DbPool,
}

impl SqliteCompanyStore {
    /// Open the catalog database at `path`, creating file and schema
    /// when missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let manager = SqliteConnectionManager::file(path.as_ref());
        let pool = Pool::builder().max_size(4).build(manager)?;
        let store = Self { pool };
        store.create_schema()?;
        Ok(store)
    }

    /// In-memory catalog for tests. The pool is pinned to one connection
    /// because each in-memory connection is its own database.
    pub fn open_in_memory() -> Result<Self, ApiError> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder().max_size(1).build(manager)?;
        let store = Self { pool };
        store.create_schema()?;
        Ok(store)
    }

    fn create_schema(&self) -> Result<(), ApiError> {
        let conn = self.pool.get()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS companies (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 symbol TEXT UNIQUE,
                 name TEXT,
                 exchange TEXT
             )",
            [],
        )?;
        Ok(())
    }
}

impl CompanyStore for SqliteCompanyStore {
    fn insert_if_absent(&self, company: &Company) -> Result<bool, ApiError> {
        let conn = self.pool.get()?;
        let changed = conn.execute(
            "INSERT OR IGNORE INTO companies (symbol, name, exchange) VALUES (?1, ?2, ?3)",
            params![company.symbol, company.name, company.exchange.as_str()],
        )?;
        Ok(changed > 0)
    }

    fn list(&self, exchange: Option<Exchange>) -> Result<Vec<Company>, ApiError> {
        let conn = self.pool.get()?;
        let rows: Vec<(String, String, String)> = match exchange {
            Some(exchange) => {
                let mut stmt = conn.prepare(
                    "SELECT symbol, name, exchange FROM companies
                     WHERE exchange = ?
                     ORDER BY id",
                )?;
                // Tail temporaries outlive the arm; collect before `stmt` drops.
                let collected = stmt
                    .query_map(params![exchange.as_str()], row_to_parts)?
                    .collect::<Result<Vec<_>, _>>()?;
                collected
            }
            None => {
                let mut stmt =
                    conn.prepare("SELECT symbol, name, exchange FROM companies ORDER BY id")?;
                let collected = stmt
                    .query_map([], row_to_parts)?
                    .collect::<Result<Vec<_>, _>>()?;
                collected
            }
        };

        rows.into_iter().map(company_from_parts).collect()
    }

    fn get_by_symbol(&self, symbol: &str) -> Result<Option<Company>, ApiError> {
        let conn = self.pool.get()?;
        let row = conn
            .prepare("SELECT symbol, name, exchange FROM companies WHERE symbol = ?")?
            .query_row(params![symbol], row_to_parts);

        match row {
            Ok(parts) => Ok(Some(company_from_parts(parts)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn row_to_parts(row: &rusqlite::Row<'_>) -> rusqlite::Result<(String, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn company_from_parts(
    (symbol, name, exchange): (String, String, String),
) -> Result<Company, ApiError> {
    let exchange = Exchange::from_str(&exchange).map_err(ApiError::Store)?;
    Ok(Company {
        symbol,
        name,
        exchange,
    })
}
