//! Shared data models spanning the catalog and quote layers.

pub mod company;
pub mod quote;

pub use company::{Company, Exchange};
pub use quote::{DerivedBar, IndicatorSummary, PriceBar, StockMetrics, StockQuote};
