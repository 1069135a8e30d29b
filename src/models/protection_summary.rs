use serde::{Deserialize, Serialize};

use crate::models::AnnotatedPoint;
use crate::utils::pct_change;

/// Headline numbers for one protection run, derived from its annotated series.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ProtectionSummary {
    /// First-to-last change of the raw market price, in percent.
    pub market_change_pct: f64,
    /// First price to last protected value, in percent.
    pub protected_change_pct: f64,
    /// `protected_change_pct - market_change_pct`. Only worth showing when positive.
    pub losses_avoided_pct: f64,
    pub all_time_high: f64,
    /// Index where protection engaged, if it ever did.
    pub trigger_index: Option<usize>,
}

impl ProtectionSummary {
    pub fn from_points(points: &[AnnotatedPoint]) -> Self {
        let all_time_high = points.first().map(|p| p.all_time_high).unwrap_or(0.0);
        let trigger_index = points.iter().position(|p| p.triggered);

        // Fewer than two samples have no change to speak of.
        let (market_change_pct, protected_change_pct) = match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() >= 2 => (
                pct_change(first.price, last.price),
                pct_change(first.price, last.protected_value),
            ),
            _ => (0.0, 0.0),
        };

        Self {
            market_change_pct,
            protected_change_pct,
            losses_avoided_pct: protected_change_pct - market_change_pct,
            all_time_high,
            trigger_index,
        }
    }

    /// Losses avoided by protection, or `None` when protection did not help.
    pub fn losses_avoided(&self) -> Option<f64> {
        (self.losses_avoided_pct > 0.0).then_some(self.losses_avoided_pct)
    }

    pub fn is_market_positive(&self) -> bool {
        self.market_change_pct >= 0.0
    }

    pub fn was_triggered(&self) -> bool {
        self.trigger_index.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::simulate;
    use crate::config::ProtectionThreshold;
    use crate::domain::PricePoint;

    fn point(price: f64, protected_value: f64, triggered: bool) -> AnnotatedPoint {
        AnnotatedPoint {
            label: String::new(),
            price,
            all_time_high: 100.0,
            drawdown_pct: 100.0 - price,
            protected_value,
            triggered,
        }
    }

    #[test]
    fn test_summary_of_protected_drop() {
        let series = PricePoint::series_from_prices(&[100.0, 90.0, 50.0]);
        let points = simulate(&series, ProtectionThreshold::new(10.0).unwrap());
        let summary = ProtectionSummary::from_points(&points);
        assert_eq!(summary.market_change_pct, -50.0);
        assert_eq!(summary.protected_change_pct, -10.0);
        assert_eq!(summary.losses_avoided(), Some(40.0));
        assert_eq!(summary.trigger_index, Some(1));
        assert_eq!(summary.all_time_high, 100.0);
        assert!(!summary.is_market_positive());
    }

    #[test]
    fn test_summary_of_single_point_is_flat() {
        let summary = ProtectionSummary::from_points(&[point(80.0, 80.0, true)]);
        assert_eq!(summary.market_change_pct, 0.0);
        assert_eq!(summary.protected_change_pct, 0.0);
        assert_eq!(summary.losses_avoided(), None);
        assert_eq!(summary.trigger_index, Some(0));
    }

    #[test]
    fn test_summary_of_empty_run() {
        let summary = ProtectionSummary::from_points(&[]);
        assert_eq!(summary, ProtectionSummary::default());
        assert!(!summary.was_triggered());
    }

    #[test]
    fn test_no_losses_avoided_when_protection_costs() {
        // Locked out at 90 and then the market recovered to 100.
        let points = vec![
            point(95.0, 95.0, false),
            point(90.0, 90.0, true),
            point(100.0, 90.0, true),
        ];
        let summary = ProtectionSummary::from_points(&points);
        assert!(summary.losses_avoided_pct < 0.0);
        assert_eq!(summary.losses_avoided(), None);
        assert!(summary.is_market_positive());
    }
}
