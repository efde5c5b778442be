use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The market-data source could not be reached, rejected the login, or
    /// failed mid-request. Aborts the whole classification.
    #[error("Market data source unavailable: {0}")]
    DataSource(#[from] market_data::Error),

    /// Every candidate window size came back without data.
    #[error("No price data available for any window size")]
    NoData,

    /// A window returned fewer observations than the polynomial fit needs.
    /// The candidate windows all request at least 10 bars, so this points at
    /// a data-source contract violation and is fatal for the request.
    #[error("Not enough observations for the fit: got {got}, need {needed}")]
    InsufficientData { needed: usize, got: usize },

    /// The least-squares system collapsed (e.g. all bars share a timestamp).
    #[error("Polynomial fit is singular for this window")]
    SingularFit,
}

pub type Result<T> = std::result::Result<T, Error>;
