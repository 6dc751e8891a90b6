//! Core application primitives (HTTP surface, server wiring)

pub mod http;

pub use http::*;
