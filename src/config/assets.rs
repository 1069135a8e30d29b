//! Coin catalogue for spot quotes and chart assets

pub struct CoinInfo {
    /// Identifier used by the price source (e.g. "avalanche-2")
    pub id: &'static str,
    pub symbol: &'static str,
    pub icon: &'static str,
}

pub struct AssetConfig {
    /// Every coin we know how to label.
    pub known_coins: &'static [CoinInfo],
    /// Coins shown on the live market strip, in display order.
    pub tracked_ids: &'static [&'static str],
}

impl AssetConfig {
    pub fn coin_info(&self, id: &str) -> Option<&CoinInfo> {
        self.known_coins.iter().find(|coin| coin.id == id)
    }
}

pub const ASSETS: AssetConfig = AssetConfig {
    known_coins: &[
        CoinInfo { id: "bitcoin", symbol: "BTC", icon: "₿" },
        CoinInfo { id: "ethereum", symbol: "ETH", icon: "Ξ" },
        CoinInfo { id: "solana", symbol: "SOL", icon: "◎" },
        CoinInfo { id: "cardano", symbol: "ADA", icon: "₳" },
        CoinInfo { id: "polkadot", symbol: "DOT", icon: "●" },
        CoinInfo { id: "avalanche-2", symbol: "AVAX", icon: "▲" },
        CoinInfo { id: "matic-network", symbol: "MATIC", icon: "⬡" },
        CoinInfo { id: "weth", symbol: "WETH", icon: "Ξ" },
        CoinInfo { id: "wrapped-bitcoin", symbol: "WBTC", icon: "₿" },
    ],
    tracked_ids: &["bitcoin", "ethereum", "solana", "cardano", "polkadot", "avalanche-2"],
};
