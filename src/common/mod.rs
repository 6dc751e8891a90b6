//! Cross-cutting helpers shared by the service layers.

pub mod math;
