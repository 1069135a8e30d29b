//! Spot price documents (`simple/price` shape) to display quotes.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{ASSETS, DF};

#[derive(Deserialize, Debug, Clone, Copy, Default)]
struct SpotEntry {
    usd: Option<f64>,
    usd_24h_change: Option<f64>,
}

/// Current price and 24h change of one coin, ready for the market strip.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CryptoQuote {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub icon: String,
    /// USD price, 0.0 when the source had nothing for this coin.
    pub price: f64,
    pub change_24h_pct: f64,
}

/// "avalanche-2" -> "Avalanche", "bitcoin" -> "Bitcoin".
pub fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replace("-2", ""),
        None => String::new(),
    }
}

/// Quotes for the tracked coins, in display order.
pub fn parse_spot_prices(json: &str) -> Result<Vec<CryptoQuote>> {
    parse_spot_prices_for(json, ASSETS.tracked_ids)
}

/// Quotes for the tracked coins plus `chart_id`, which is appended when the
/// market strip does not already carry it.
pub fn parse_spot_prices_with(json: &str, chart_id: &str) -> Result<Vec<CryptoQuote>> {
    let mut ids: Vec<&str> = ASSETS.tracked_ids.to_vec();
    if !ids.contains(&chart_id) {
        ids.push(chart_id);
    }
    parse_spot_prices_for(json, &ids)
}

/// Quotes for `ids`, in the order given. Coins missing from the document are
/// quoted at 0.0 rather than treated as an error.
pub fn parse_spot_prices_for(json: &str, ids: &[&str]) -> Result<Vec<CryptoQuote>> {
    let entries: HashMap<String, SpotEntry> =
        serde_json::from_str(json).context("Malformed spot price document")?;

    let quotes: Vec<CryptoQuote> = ids
        .iter()
        .map(|&id| {
            let entry = entries.get(id).copied().unwrap_or_default();
            let (symbol, icon) = match ASSETS.coin_info(id) {
                Some(info) => (info.symbol.to_string(), info.icon.to_string()),
                None => (id.to_uppercase(), String::new()),
            };
            CryptoQuote {
                id: id.to_string(),
                name: display_name(id),
                symbol,
                icon,
                price: entry.usd.unwrap_or(0.0),
                change_24h_pct: entry.usd_24h_change.unwrap_or(0.0),
            }
        })
        .collect();

    if DF.log_data_parsing {
        let missing = ids.iter().filter(|id| !entries.contains_key(**id)).count();
        if missing > 0 {
            log::warn!("Spot prices missing for {} of {} coins", missing, ids.len());
        }
    }

    Ok(quotes)
}

/// Live price of `id`, if the quotes carry a usable one.
pub fn find_price(quotes: &[CryptoQuote], id: &str) -> Option<f64> {
    quotes
        .iter()
        .find(|quote| quote.id == id)
        .map(|quote| quote.price)
        .filter(|&price| price > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "bitcoin": {"usd": 67250.5, "usd_24h_change": -1.25},
        "ethereum": {"usd": 3120.75, "usd_24h_change": 2.5},
        "avalanche-2": {"usd": 27.1}
    }"#;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("bitcoin"), "Bitcoin");
        assert_eq!(display_name("avalanche-2"), "Avalanche");
        assert_eq!(display_name("matic-network"), "Matic-network");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_tracked_quotes_in_order() {
        let quotes = parse_spot_prices(DOC).unwrap();
        let symbols: Vec<&str> = quotes.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BTC", "ETH", "SOL", "ADA", "DOT", "AVAX"]);

        assert_eq!(quotes[0].price, 67250.5);
        assert_eq!(quotes[0].change_24h_pct, -1.25);
        assert_eq!(quotes[0].icon, "₿");
        assert_eq!(quotes[5].name, "Avalanche");
        assert_eq!(quotes[5].change_24h_pct, 0.0);
    }

    #[test]
    fn test_missing_coins_quote_zero() {
        let quotes = parse_spot_prices(DOC).unwrap();
        let solana = &quotes[2];
        assert_eq!(solana.id, "solana");
        assert_eq!(solana.price, 0.0);
        assert_eq!(find_price(&quotes, "solana"), None);
    }

    #[test]
    fn test_find_price() {
        let quotes = parse_spot_prices(DOC).unwrap();
        assert_eq!(find_price(&quotes, "ethereum"), Some(3120.75));
        assert_eq!(find_price(&quotes, "wrapped-bitcoin"), None);
    }

    #[test]
    fn test_chart_assets_outside_the_strip_are_quoted() {
        let doc = r#"{
            "matic-network": {"usd": 0.71, "usd_24h_change": -3.2},
            "wrapped-bitcoin": {"usd": 67000.0, "usd_24h_change": 0.4}
        }"#;

        let quotes = parse_spot_prices_with(doc, "matic-network").unwrap();
        assert_eq!(quotes.len(), 7);
        assert_eq!(quotes[6].symbol, "MATIC");
        assert_eq!(find_price(&quotes, "matic-network"), Some(0.71));

        let quotes = parse_spot_prices_with(doc, "wrapped-bitcoin").unwrap();
        assert_eq!(find_price(&quotes, "wrapped-bitcoin"), Some(67000.0));
    }

    #[test]
    fn test_tracked_chart_asset_is_not_duplicated() {
        let quotes = parse_spot_prices_with(DOC, "ethereum").unwrap();
        assert_eq!(quotes.len(), 6);
        assert_eq!(find_price(&quotes, "ethereum"), Some(3120.75));
    }

    #[test]
    fn test_unknown_ids_fall_back_to_upper_case() {
        let quotes = parse_spot_prices_for(DOC, &["dogecoin"]).unwrap();
        assert_eq!(quotes[0].symbol, "DOGECOIN");
        assert_eq!(quotes[0].name, "Dogecoin");
        assert_eq!(quotes[0].icon, "");
    }

    #[test]
    fn test_malformed_document() {
        assert!(parse_spot_prices("[1, 2, 3]").is_err());
        assert!(parse_spot_prices(r#"{"bitcoin": {"usd": "cheap"}}"#).is_err());
    }
}
