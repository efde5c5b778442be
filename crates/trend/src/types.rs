use std::collections::BTreeMap;

use core_types::Trend;
use serde::Serialize;

/// A point of a (normalized time, price) series.
///
/// `time` is seconds since the first bar of the window, so curves are
/// comparable across requests regardless of absolute epoch values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub time: f64,
    pub price: f64,
}

/// The trend estimate for one sample-window size.
#[derive(Debug, Clone, Serialize)]
pub struct WindowResult {
    /// The number of bars requested for this window.
    pub window_size: u32,
    /// The observed bars as (normalized time, close) points.
    pub historical: Vec<SeriesPoint>,
    /// The historical points followed by the 10 extrapolated points, one
    /// continuous series for plotting.
    pub predicted: Vec<SeriesPoint>,
    /// Secant slope of the fitted curve across the forecast horizon.
    pub slope: f64,
    pub trend: Trend,
    pub message: String,
}

/// The combined verdict across all attempted window sizes.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    /// Per-window results, keyed by window size. Windows the source had no
    /// data for are absent.
    pub windows: BTreeMap<u32, WindowResult>,
    pub majority_trend: Trend,
    pub majority_message: String,
}

/// Valid inputs for a classification request.
#[derive(Debug, Clone, Serialize)]
pub struct OptionsCatalog {
    /// Instrument catalogue of the market-data source.
    pub tickers: Vec<String>,
    /// The fixed set of recognized horizon labels.
    pub horizons: Vec<&'static str>,
}
