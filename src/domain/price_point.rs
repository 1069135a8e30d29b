use serde::{Deserialize, Serialize};

/// One sample of an asset's price history.
/// Samples are ordered by time through their position in a series; `label` is
/// only ever displayed, never parsed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub label: String,
    /// Price in USD.
    pub price: f64,
}

impl PricePoint {
    pub fn new(label: impl Into<String>, price: f64) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }

    /// Build an unlabelled series (labels are the sample index), handy for quick runs.
    pub fn series_from_prices(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| Self::new(i.to_string(), price))
            .collect()
    }

    /// Build a series from `(label, price)` pairs such as the demo data.
    pub fn series_from_pairs(pairs: &[(&str, f64)]) -> Vec<PricePoint> {
        pairs
            .iter()
            .map(|&(label, price)| Self::new(label, price))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_from_prices_keeps_order() {
        let series = PricePoint::series_from_prices(&[100.0, 120.0, 90.0]);
        assert_eq!(series.len(), 3);
        assert_eq!(series[1], PricePoint::new("1", 120.0));
        assert_eq!(series[2].price, 90.0);
    }

    #[test]
    fn test_series_from_pairs() {
        let series = PricePoint::series_from_pairs(&[("Jan 1", 10.0), ("Jan 2", 11.5)]);
        assert_eq!(series[0].label, "Jan 1");
        assert_eq!(series[1].price, 11.5);
    }
}
