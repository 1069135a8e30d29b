use serde::{Deserialize, Serialize};

use crate::config::SIMULATION;
use crate::utils::round_to;

/// A price sample annotated with the outcome of a protection run.
/// Always produced wholesale by the simulator; never patched in place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnnotatedPoint {
    pub label: String,
    /// Unprotected market price.
    pub price: f64,
    /// Highest price of the whole series, identical on every point of a run.
    pub all_time_high: f64,
    /// Decline below `all_time_high`, in percent (unrounded).
    pub drawdown_pct: f64,
    /// Market price until protection engages, then the locked exit price.
    pub protected_value: f64,
    /// True from the first triggering sample onward.
    pub triggered: bool,
}

impl AnnotatedPoint {
    pub fn display_price(&self) -> f64 {
        round_to(self.price, SIMULATION.price_decimals)
    }

    pub fn display_protected_value(&self) -> f64 {
        round_to(self.protected_value, SIMULATION.price_decimals)
    }

    pub fn display_drawdown_pct(&self) -> f64 {
        round_to(self.drawdown_pct, SIMULATION.drawdown_decimals)
    }
}
