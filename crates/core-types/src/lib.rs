pub mod types;

// Re-export the most important types for easy access from other crates.
pub use types::{Granularity, PriceBar, Symbol, Trend};
