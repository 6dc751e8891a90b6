//! Embedded symbol catalog store.

pub mod catalog;
pub mod seed;

pub use catalog::{CompanyStore, DbPool, SqliteCompanyStore};
pub use seed::initialize;
