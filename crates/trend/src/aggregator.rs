use std::collections::BTreeMap;

use core_types::{Symbol, Trend};
use market_data::{BarSource, Session};

use crate::error::{Error, Result};
use crate::estimator::estimate;
use crate::intervals;
use crate::thresholds::thresholds_for;
use crate::types::{AggregateResult, WindowResult};

/// The fixed candidate sample sizes, in bars. Several independent window
/// lengths vote so that one unlucky fitting window cannot decide the
/// verdict alone.
pub const WINDOW_SIZES: [u32; 8] = [10, 15, 20, 25, 30, 35, 40, 50];

/// Immutable aggregation configuration, built once at startup and shared
/// across requests.
#[derive(Debug, Clone)]
pub struct TrendConfig {
    pub window_sizes: Vec<u32>,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window_sizes: WINDOW_SIZES.to_vec(),
        }
    }
}

/// Verdict counter, indexed by `Trend::ALL` order.
#[derive(Debug, Default)]
struct Tally([usize; 3]);

impl Tally {
    fn record(&mut self, trend: Trend) {
        let idx = match trend {
            Trend::Uptrend => 0,
            Trend::Downtrend => 1,
            Trend::Neutral => 2,
        };
        self.0[idx] += 1;
    }

    /// The verdict with the highest count. Ties resolve to the verdict
    /// earliest in `Trend::ALL` (uptrend > downtrend > neutral): a later
    /// candidate must strictly beat the current leader.
    fn leader(&self) -> (Trend, usize) {
        let mut leader = (Trend::ALL[0], self.0[0]);
        for (trend, count) in Trend::ALL.into_iter().zip(self.0).skip(1) {
            if count > leader.1 {
                leader = (trend, count);
            }
        }
        leader
    }
}

fn majority_message(trend: Trend, tally: usize, attempted: usize) -> String {
    // The denominator is the full candidate list, not just the windows that
    // produced data: skipped windows weaken the verdict.
    if tally * 2 >= attempted {
        match trend {
            Trend::Downtrend => {
                "Final Verdict: Exchange the currency now to get the best value.".to_string()
            }
            Trend::Uptrend => {
                "Final Verdict: Wait for the price to drop before exchanging the currency."
                    .to_string()
            }
            Trend::Neutral => {
                "Final Verdict: You can exchange the currency anytime as the exchange rate will not have significant changes."
                    .to_string()
            }
        }
    } else {
        "Since There is no significant bias towards one trend, the price action is questionable at current time for this analysis, hence there is no conclusive verdict at this time."
            .to_string()
    }
}

/// Runs the estimator over every candidate window size and combines the
/// per-window verdicts into one majority verdict.
///
/// The horizon is resolved once; granularity, bar duration and thresholds
/// are shared across windows. Window sizes the source has no data for are
/// skipped; if every window is skipped the request fails with `NoData`.
/// Fit failures propagate and abort the request.
pub async fn aggregate(
    source: &dyn BarSource,
    session: &Session,
    config: &TrendConfig,
    ticker: &Symbol,
    horizon: &str,
) -> Result<AggregateResult> {
    let (granularity, interval_secs) = intervals::resolve(horizon);
    let thresholds = thresholds_for(granularity);

    tracing::info!(%ticker, horizon, %granularity, "classifying trend");

    let mut windows: BTreeMap<u32, WindowResult> = BTreeMap::new();
    let mut tally = Tally::default();

    for &window_size in &config.window_sizes {
        let bars = match source
            .fetch_bars(session, ticker, granularity, window_size)
            .await?
        {
            Some(bars) => bars,
            None => {
                tracing::warn!(%ticker, window_size, "no bars for window, skipping");
                continue;
            }
        };

        let result = estimate(&bars, window_size, interval_secs, thresholds)?;
        tally.record(result.trend);
        windows.insert(window_size, result);
    }

    if windows.is_empty() {
        return Err(Error::NoData);
    }

    let (majority_trend, winning) = tally.leader();
    let majority_message = majority_message(majority_trend, winning, config.window_sizes.len());

    tracing::info!(%ticker, ?majority_trend, winning, "verdict aggregated");

    Ok(AggregateResult {
        windows,
        majority_trend,
        majority_message,
    })
}
