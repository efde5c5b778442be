use core_types::Granularity;

/// Slope cutoffs for one granularity.
///
/// Raw price-vs-seconds slopes shrink as bars get coarser, so each
/// granularity carries its own empirically tuned pair. These are
/// configuration data, not algorithm: re-tuning them must not require
/// touching the estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPair {
    /// Slopes strictly above this classify as uptrend. Always > 0.
    pub uptrend: f64,
    /// Slopes strictly below this classify as downtrend. Always < 0.
    pub downtrend: f64,
}

/// The cutoff pair for a granularity. Total over the closed enum, which
/// subsumes the documented fall-back-to-1-minute policy for unmapped
/// granularities.
pub fn thresholds_for(granularity: Granularity) -> ThresholdPair {
    let (uptrend, downtrend) = match granularity {
        Granularity::M1 => (1e-7, -1.5e-7),
        Granularity::M5 => (1e-7, -1.5e-7),
        Granularity::M15 => (1e-7, -1.5e-7),
        Granularity::M30 => (1e-8, -1e-8),
        Granularity::H1 => (0.95e-7, -0.9e-8),
        Granularity::H4 => (0.95e-8, -1.5e-8),
        Granularity::D1 => (1e-8, -1.5e-9),
        Granularity::W1 => (0.95e-9, -1.5e-9),
        Granularity::Mn1 => (1.1e-9, -1.2e-9),
    };
    ThresholdPair { uptrend, downtrend }
}
