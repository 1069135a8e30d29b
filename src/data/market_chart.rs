//! Historical price documents (`market_chart` shape) to chart-ready series.
//!
//! The document carries `[timestamp_ms, price]` pairs under `prices`; any
//! other keys (market caps, volumes) are ignored. Samples are labelled for
//! the lookback they were requested with, rounded to cents, and thinned to
//! roughly [`SimulationConfig::max_chart_points`](crate::config::SimulationConfig).

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::{DF, SIMULATION};
use crate::domain::PricePoint;
use crate::utils::{chart_label, epoch_ms_to_date_string, round_to};

#[derive(Deserialize, Debug, Clone)]
pub struct MarketChartDocument {
    /// `[timestamp_ms, price]`, oldest first.
    pub prices: Vec<(f64, f64)>,
}

impl MarketChartDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Malformed market chart document")
    }

    /// Labelled, rounded and thinned series for a `days` lookback.
    pub fn to_price_points(&self, days: u32) -> Result<Vec<PricePoint>> {
        let points = self
            .prices
            .iter()
            .map(|&(timestamp_ms, price)| -> Result<PricePoint> {
                let label = chart_label(timestamp_ms as i64, days)?;
                Ok(PricePoint::new(label, round_to(price, SIMULATION.price_decimals)))
            })
            .collect::<Result<Vec<_>>>()?;

        let raw_len = points.len();
        let thinned = downsample(points, SIMULATION.max_chart_points);

        if DF.log_data_parsing {
            let span = match (self.prices.first(), self.prices.last()) {
                (Some(first), Some(last)) => format!(
                    "{} .. {}",
                    epoch_ms_to_date_string(first.0 as i64)?,
                    epoch_ms_to_date_string(last.0 as i64)?
                ),
                _ => "empty".to_string(),
            };
            log::info!(
                "Market chart {} ({}d): {} samples thinned to {}",
                span,
                days,
                raw_len,
                thinned.len()
            );
        }

        Ok(thinned)
    }
}

/// Parse a `market_chart` JSON document straight into a chart series.
pub fn parse_market_chart(json: &str, days: u32) -> Result<Vec<PricePoint>> {
    MarketChartDocument::from_json(json)?.to_price_points(days)
}

/// Keep every `step`-th sample, `step = max(1, len / max_points)`.
/// The result can exceed `max_points` by up to a factor of two; the chart only
/// needs it smooth, not exact.
pub fn downsample<T>(items: Vec<T>, max_points: usize) -> Vec<T> {
    let step = (items.len() / max_points.max(1)).max(1);
    if step == 1 {
        return items;
    }
    items
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0)
        .map(|(_, item)| item)
        .collect()
}
