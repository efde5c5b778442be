use serde::{Deserialize, Serialize};

/// A trading instrument identifier, e.g. "EURUSD".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single OHLC price bar as returned by the market-data bridge.
///
/// Bars arrive ordered by `time` ascending, one per granularity tick.
/// Prices are plain f64 because every downstream consumer (the polynomial
/// fit and the slope classification) works in double precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Bar open time, seconds since the Unix epoch.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// The sampling granularity of a price bar.
///
/// Total-ordered by bar duration, finest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Granularity {
    M1,
    M5,
    M15,
    M30,
    H1,
    H4,
    D1,
    W1,
    Mn1,
}

impl Granularity {
    /// Every granularity, finest to coarsest.
    pub const ALL: [Granularity; 9] = [
        Granularity::M1,
        Granularity::M5,
        Granularity::M15,
        Granularity::M30,
        Granularity::H1,
        Granularity::H4,
        Granularity::D1,
        Granularity::W1,
        Granularity::Mn1,
    ];

    /// Duration of one bar in seconds.
    pub fn duration_secs(&self) -> u64 {
        match self {
            Granularity::M1 => 60,
            Granularity::M5 => 300,
            Granularity::M15 => 900,
            Granularity::M30 => 1800,
            Granularity::H1 => 3600,
            Granularity::H4 => 14400,
            Granularity::D1 => 86400,
            Granularity::W1 => 604800,
            Granularity::Mn1 => 2592000,
        }
    }

    /// The timeframe code the bridge expects, e.g. "M15".
    pub fn code(&self) -> &'static str {
        match self {
            Granularity::M1 => "M1",
            Granularity::M5 => "M5",
            Granularity::M15 => "M15",
            Granularity::M30 => "M30",
            Granularity::H1 => "H1",
            Granularity::H4 => "H4",
            Granularity::D1 => "D1",
            Granularity::W1 => "W1",
            Granularity::Mn1 => "MN1",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Directional bias of a fitted price curve.
///
/// Declaration order doubles as the majority tie-break order: when two
/// verdicts reach the same tally across windows, the one declared first
/// wins (uptrend > downtrend > neutral).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Uptrend,
    Downtrend,
    Neutral,
}

impl Trend {
    /// Tie-break / tally order.
    pub const ALL: [Trend; 3] = [Trend::Uptrend, Trend::Downtrend, Trend::Neutral];

    /// The per-window message shown to the user for this verdict.
    pub fn message(&self) -> &'static str {
        match self {
            Trend::Uptrend => "Uptrend detected",
            Trend::Downtrend => "Downtrend detected",
            Trend::Neutral => "Neutral Trend",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granularities_are_ordered_by_duration() {
        let mut prev = 0;
        for g in Granularity::ALL {
            assert!(g.duration_secs() > prev);
            prev = g.duration_secs();
        }
    }

    #[test]
    fn trend_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Trend::Uptrend).unwrap(), "\"uptrend\"");
    }
}
