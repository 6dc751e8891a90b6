pub mod trend;

pub use trend::*;
