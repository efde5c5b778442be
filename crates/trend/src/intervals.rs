use core_types::Granularity;

/// The nine recognized forecast-horizon labels and the sampling granularity
/// each one maps to. A longer horizon needs coarser bars to cover enough
/// history with the same window sizes.
pub const HORIZON_LABELS: [(&str, Granularity); 9] = [
    ("Within 2 days", Granularity::M1),
    ("Within 2-4 days", Granularity::M5),
    ("Within 4-7 days", Granularity::M15),
    ("Within 1-2 Week", Granularity::M30),
    ("Within 2-3 Week", Granularity::H1),
    ("Within 1 Month", Granularity::H4),
    ("Within 2 Months", Granularity::D1),
    ("Within 4 Months", Granularity::W1),
    ("Within 4-12 Months", Granularity::Mn1),
];

/// Resolves a horizon label to its granularity and the bar duration in
/// seconds.
///
/// Unrecognized labels fall back to the finest granularity (1 minute)
/// rather than failing; unknown input is non-fatal by design.
pub fn resolve(horizon: &str) -> (Granularity, u64) {
    let granularity = HORIZON_LABELS
        .iter()
        .find(|(label, _)| *label == horizon)
        .map(|(_, g)| *g)
        .unwrap_or(Granularity::M1);
    (granularity, granularity.duration_secs())
}

/// The recognized labels, in horizon order.
pub fn horizon_labels() -> Vec<&'static str> {
    HORIZON_LABELS.iter().map(|(label, _)| *label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_labels() {
        assert_eq!(resolve("Within 2 days"), (Granularity::M1, 60));
        assert_eq!(resolve("Within 1 Month"), (Granularity::H4, 14400));
        assert_eq!(resolve("Within 4-12 Months"), (Granularity::Mn1, 2592000));
    }

    #[test]
    fn unknown_label_falls_back_to_one_minute() {
        assert_eq!(resolve("sometime next year"), resolve("Within 2 days"));
        assert_eq!(resolve(""), (Granularity::M1, 60));
    }
}
