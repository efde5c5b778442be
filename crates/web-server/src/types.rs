use core_types::Symbol;
use serde::Deserialize;

/// Body of `POST /api/rates`.
#[derive(Debug, Deserialize)]
pub struct RatesRequest {
    /// The instrument to classify, e.g. "EURUSD".
    pub ticker: Symbol,
    /// One of the nine horizon labels; unknown labels fall back to the
    /// finest granularity rather than being rejected.
    pub horizon: String,
}
