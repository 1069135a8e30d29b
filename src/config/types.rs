//! Value types and selector enums shared across the simulator, the data
//! adapters and the CLI.

use anyhow::{Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::SIMULATION;

/// Percentage drawdown from the period high that triggers protection.
/// Always strictly inside (0, 100).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ProtectionThreshold(f64);

impl ProtectionThreshold {
    pub const DEFAULT: Self = Self(SIMULATION.default_threshold_pct);

    pub fn new(pct: f64) -> Result<Self> {
        // Written this way round so NaN is rejected too.
        if !(pct > 0.0 && pct < 100.0) {
            bail!(
                "Protection threshold must be between 0% and 100% (exclusive), got {}",
                pct
            );
        }
        Ok(Self(pct))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// The preset thresholds offered by the chart selector.
    pub fn presets() -> impl Iterator<Item = Self> {
        SIMULATION.threshold_presets_pct.iter().map(|&pct| Self(pct))
    }
}

impl Default for ProtectionThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for ProtectionThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-{}%", self.0)
    }
}

/// How far back the price history reaches.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display, ValueEnum, Default,
)]
pub enum LookbackWindow {
    #[strum(to_string = "10D")]
    #[value(name = "10d")]
    D10,
    #[strum(to_string = "30D")]
    #[value(name = "30d")]
    D30,
    #[default]
    #[strum(to_string = "90D")]
    #[value(name = "90d")]
    D90,
}

impl LookbackWindow {
    pub fn days(&self) -> u32 {
        match self {
            Self::D10 => 10,
            Self::D30 => 30,
            Self::D90 => 90,
        }
    }
}

/// Assets the protection chart can be switched between.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display, ValueEnum, Default,
)]
pub enum ChartAsset {
    #[default]
    #[strum(to_string = "Ethereum")]
    #[value(name = "eth")]
    Ethereum,
    #[strum(to_string = "Polygon")]
    #[value(name = "matic")]
    Polygon,
    #[strum(to_string = "Wrapped BTC")]
    #[value(name = "wbtc")]
    WrappedBitcoin,
}

impl ChartAsset {
    /// Identifier used by the price source.
    pub fn coin_id(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Polygon => "matic-network",
            Self::WrappedBitcoin => "wrapped-bitcoin",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Ethereum => "ETH",
            Self::Polygon => "MATIC",
            Self::WrappedBitcoin => "WBTC",
        }
    }
}
