//! Quote assembly service.

pub mod service;

pub use service::QuoteService;
