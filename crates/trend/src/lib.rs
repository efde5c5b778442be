use std::sync::Arc;

use core_types::Symbol;
use market_data::BarSource;

pub mod aggregator;
pub mod error;
pub mod estimator;
pub mod intervals;
pub mod polyfit;
pub mod thresholds;
pub mod types;

// Re-export the most important types for easy access from other crates.
pub use aggregator::{TrendConfig, WINDOW_SIZES};
pub use error::{Error, Result};
pub use types::{AggregateResult, OptionsCatalog, WindowResult};

/// The entry point the request layer talks to.
///
/// Owns the immutable aggregation configuration and the injected bar
/// source. Every request opens its own session handle and releases it on
/// every exit path after a successful connect; because the handle is
/// request-local, concurrent requests through the same shared source
/// cannot interfere with each other's sessions.
pub struct TrendService {
    source: Arc<dyn BarSource>,
    config: TrendConfig,
}

impl TrendService {
    pub fn new(source: Arc<dyn BarSource>, config: TrendConfig) -> Self {
        Self { source, config }
    }

    /// Classifies the directional bias of `ticker` over the given horizon.
    pub async fn classify_trend(&self, ticker: &Symbol, horizon: &str) -> Result<AggregateResult> {
        let session = self.source.connect().await?;
        let outcome = aggregator::aggregate(
            self.source.as_ref(),
            &session,
            &self.config,
            ticker,
            horizon,
        )
        .await;
        // Released before propagating any failure.
        self.source.disconnect(session).await;
        outcome
    }

    /// Lists valid classification inputs: the source's instrument catalogue
    /// and the fixed horizon labels.
    pub async fn list_options(&self) -> Result<OptionsCatalog> {
        let session = self.source.connect().await?;
        let symbols = self.source.symbols(&session).await;
        self.source.disconnect(session).await;

        Ok(OptionsCatalog {
            tickers: symbols?,
            horizons: intervals::horizon_labels(),
        })
    }
}
