//! Protection simulation defaults and presentation settings

/// The Master Simulation Configuration
pub struct SimulationConfig {
    /// Drawdown (%) from the period high that triggers protection when nothing else is chosen.
    pub default_threshold_pct: f64,
    /// Thresholds offered by the chart's selector buttons.
    pub threshold_presets_pct: &'static [f64],
    /// Price histories longer than this are thinned out before charting.
    pub max_chart_points: usize,
    /// Decimal places for prices and protected values on display.
    pub price_decimals: u32,
    /// Decimal places for drawdown percentages on display.
    pub drawdown_decimals: u32,
}

pub const SIMULATION: SimulationConfig = SimulationConfig {
    default_threshold_pct: 5.0,
    threshold_presets_pct: &[5.0, 10.0, 20.0],
    max_chart_points: 50,
    price_decimals: 2,
    drawdown_decimals: 1,
};
