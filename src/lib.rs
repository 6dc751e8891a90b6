//! Stockboard: a stock quote API over a fixed company catalog.

pub mod common;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod quotes;
pub mod services;
