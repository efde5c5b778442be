use core_types::{PriceBar, Trend};

use crate::error::Result;
use crate::polyfit::{eval, polyfit};
use crate::thresholds::ThresholdPair;
use crate::types::{SeriesPoint, WindowResult};

/// Degree of the fitted polynomial. Fixed: high enough to capture the
/// curvature of a reversal, low enough not to overfit a 10-bar window.
pub const FIT_DEGREE: usize = 3;

/// Number of future points extrapolated past the last observed bar.
pub const FORECAST_POINTS: usize = 10;

/// Classifies a slope against a cutoff pair.
///
/// Comparisons are strict: a slope exactly on a cutoff is neutral.
pub fn classify(slope: f64, thresholds: ThresholdPair) -> Trend {
    if slope > thresholds.uptrend {
        Trend::Uptrend
    } else if slope < thresholds.downtrend {
        Trend::Downtrend
    } else {
        Trend::Neutral
    }
}

/// Fits one window of bars and classifies its forecast direction.
///
/// Timestamps are normalized to seconds since the first bar, a degree-3
/// polynomial is fitted to the close prices, and 10 future points are
/// extrapolated at `interval_secs` spacing. The trend signal is the secant
/// slope between the first and last extrapolated point — the net direction
/// over the forecast horizon, deliberately smoother than an instantaneous
/// derivative at the window edge.
pub fn estimate(
    bars: &[PriceBar],
    window_size: u32,
    interval_secs: u64,
    thresholds: ThresholdPair,
) -> Result<WindowResult> {
    let t0 = bars.first().map(|b| b.time).unwrap_or(0);
    let times: Vec<f64> = bars.iter().map(|b| (b.time - t0) as f64).collect();
    let prices: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let coeffs = polyfit(&times, &prices, FIT_DEGREE)?;

    let last = *times.last().unwrap_or(&0.0);
    let step = interval_secs as f64;
    let future_times: Vec<f64> = (1..=FORECAST_POINTS)
        .map(|i| last + i as f64 * step)
        .collect();
    let future_prices: Vec<f64> = future_times.iter().map(|&t| eval(&coeffs, t)).collect();

    // Net direction across the forecast horizon.
    let slope = (future_prices[FORECAST_POINTS - 1] - future_prices[0])
        / (future_times[FORECAST_POINTS - 1] - future_times[0]);

    let trend = classify(slope, thresholds);

    let historical: Vec<SeriesPoint> = times
        .iter()
        .zip(&prices)
        .map(|(&time, &price)| SeriesPoint { time, price })
        .collect();
    let mut predicted = historical.clone();
    predicted.extend(
        future_times
            .iter()
            .zip(&future_prices)
            .map(|(&time, &price)| SeriesPoint { time, price }),
    );

    tracing::debug!(window_size, slope, ?trend, "window estimated");

    Ok(WindowResult {
        window_size,
        historical,
        predicted,
        slope,
        trend,
        message: trend.message().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::thresholds::thresholds_for;
    use core_types::Granularity;

    fn linear_bars(count: usize, start_price: f64, step: f64, spacing: i64) -> Vec<PriceBar> {
        (0..count)
            .map(|i| {
                let close = start_price + i as f64 * step;
                PriceBar {
                    time: 1_700_000_000 + i as i64 * spacing,
                    open: close,
                    high: close,
                    low: close,
                    close,
                }
            })
            .collect()
    }

    #[test]
    fn rising_minute_bars_classify_as_uptrend() {
        // 50 bars climbing a constant 0.0001 per minute: slope ~1.7e-6,
        // well above the 1e-7 one-minute cutoff.
        let bars = linear_bars(50, 1.10, 1e-4, 60);
        let result = estimate(&bars, 50, 60, thresholds_for(Granularity::M1)).unwrap();

        assert_eq!(result.trend, Trend::Uptrend);
        assert_eq!(result.message, "Uptrend detected");
        assert!(result.slope > 1e-7, "slope {} not above cutoff", result.slope);
        assert!((result.slope - 1e-4 / 60.0).abs() < 1e-8);
    }

    #[test]
    fn falling_minute_bars_classify_as_downtrend() {
        let bars = linear_bars(50, 1.20, -1e-4, 60);
        let result = estimate(&bars, 50, 60, thresholds_for(Granularity::M1)).unwrap();
        assert_eq!(result.trend, Trend::Downtrend);
        assert_eq!(result.message, "Downtrend detected");
    }

    #[test]
    fn flat_bars_classify_as_neutral() {
        let bars = linear_bars(30, 1.15, 0.0, 60);
        let result = estimate(&bars, 30, 60, thresholds_for(Granularity::M1)).unwrap();
        assert_eq!(result.trend, Trend::Neutral);
        assert_eq!(result.message, "Neutral Trend");
    }

    #[test]
    fn predicted_series_extends_historical_by_forecast_points() {
        let bars = linear_bars(25, 1.0, 5e-5, 300);
        let result = estimate(&bars, 25, 300, thresholds_for(Granularity::M5)).unwrap();

        assert_eq!(result.historical.len(), 25);
        assert_eq!(result.predicted.len(), 25 + FORECAST_POINTS);
        // The historical prefix is carried over untouched.
        assert_eq!(result.predicted[..25], result.historical[..]);
        // Extrapolated points start one interval past the last observation.
        assert_eq!(result.predicted[25].time, result.historical[24].time + 300.0);
    }

    #[test]
    fn normalization_ignores_absolute_epoch() {
        let early = linear_bars(40, 1.05, 2e-4, 60);
        let late: Vec<PriceBar> = early
            .iter()
            .map(|b| PriceBar {
                time: b.time + 1_000_000_000,
                ..*b
            })
            .collect();

        let a = estimate(&early, 40, 60, thresholds_for(Granularity::M1)).unwrap();
        let b = estimate(&late, 40, 60, thresholds_for(Granularity::M1)).unwrap();
        assert!((a.slope - b.slope).abs() < 1e-12);
        assert_eq!(a.historical[0].time, 0.0);
        assert_eq!(b.historical[0].time, 0.0);
    }

    #[test]
    fn fit_stays_within_range_of_monotonic_series() {
        let bars = linear_bars(50, 1.10, 1e-4, 60);
        let times: Vec<f64> = bars.iter().map(|b| (b.time - bars[0].time) as f64).collect();
        let prices: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let coeffs = polyfit(&times, &prices, FIT_DEGREE).unwrap();

        // Sanity bound: on a monotonic series the fitted curve at observed
        // timestamps must not leave the observed price range.
        let lo = prices.first().unwrap();
        let hi = prices.last().unwrap();
        let tolerance = (hi - lo) * 0.01;
        for &t in &times {
            let fitted = eval(&coeffs, t);
            assert!(fitted >= lo - tolerance && fitted <= hi + tolerance);
        }
    }

    #[test]
    fn too_short_window_is_fatal() {
        let bars = linear_bars(3, 1.0, 1e-4, 60);
        match estimate(&bars, 10, 60, thresholds_for(Granularity::M1)) {
            Err(Error::InsufficientData { needed: 4, got: 3 }) => {}
            other => panic!("expected InsufficientData, got {other:?}"),
        }
    }

    #[test]
    fn classification_is_strict_at_the_cutoffs() {
        let pair = thresholds_for(Granularity::M1);
        assert_eq!(classify(pair.uptrend, pair), Trend::Neutral);
        assert_eq!(classify(pair.downtrend, pair), Trend::Neutral);
        assert_eq!(classify(pair.uptrend * 1.01, pair), Trend::Uptrend);
        assert_eq!(classify(pair.downtrend * 1.01, pair), Trend::Downtrend);
    }

    #[test]
    fn classification_only_moves_when_a_cutoff_is_crossed() {
        let slope = 5e-8;
        let tight = ThresholdPair {
            uptrend: 1e-8,
            downtrend: -1e-8,
        };
        let loose = ThresholdPair {
            uptrend: 1e-7,
            downtrend: -1.5e-7,
        };
        // Same slope, different pairs: result changes only because the
        // uptrend cutoff crossed from below to above the slope.
        assert_eq!(classify(slope, tight), Trend::Uptrend);
        assert_eq!(classify(slope, loose), Trend::Neutral);
    }
}
