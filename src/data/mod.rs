mod market_chart;
mod spot_prices;

use {
    crate::domain::PricePoint,
    anyhow::{Context, Result},
    std::path::Path,
};

pub use {
    market_chart::{MarketChartDocument, downsample, parse_market_chart},
    spot_prices::{
        CryptoQuote, display_name, find_price, parse_spot_prices, parse_spot_prices_for,
        parse_spot_prices_with,
    },
};

/// Read a `market_chart` document from disk and turn it into a chart series.
pub fn load_market_chart(path: &Path, days: u32) -> Result<Vec<PricePoint>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read price history from {}", path.display()))?;
    parse_market_chart(&json, days)
        .with_context(|| format!("Failed to parse price history in {}", path.display()))
}

/// Read a spot price document from disk, quoting the tracked coins and `chart_id`.
pub fn load_spot_prices(path: &Path, chart_id: &str) -> Result<Vec<CryptoQuote>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read spot prices from {}", path.display()))?;
    parse_spot_prices_with(&json, chart_id)
        .with_context(|| format!("Failed to parse spot prices in {}", path.display()))
}
