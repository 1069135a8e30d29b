// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod report;
pub mod utils;

use std::path::PathBuf;

use anyhow::{Result, bail};

// Re-export commonly used types outside of crate
pub use analysis::{DrawdownProtectionSimulator, ProtectionRun, simulate};
pub use config::{ChartAsset, LookbackWindow, ProtectionThreshold};
pub use domain::PricePoint;
pub use models::{AnnotatedPoint, ProtectionSummary};

use crate::config::{DEMO, SIMULATION};
use crate::report::{OutputFormat, ProtectionReporter};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Price history document (market_chart JSON). Uses the built-in demo series when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Spot price document (simple/price JSON) for the live price line
    #[arg(long)]
    pub spot: Option<PathBuf>,

    /// Asset the price history belongs to
    #[arg(long, value_enum, default_value_t = ChartAsset::default())]
    pub asset: ChartAsset,

    /// Lookback window the price history was requested with (drives date labels)
    #[arg(long, value_enum, default_value_t = LookbackWindow::default())]
    pub window: LookbackWindow,

    /// Drawdown (%) from the period high that triggers protection
    #[arg(long, default_value_t = SIMULATION.default_threshold_pct)]
    pub threshold: f64,

    /// Compare every preset threshold instead of a single run
    #[arg(long, default_value_t = false)]
    pub all_thresholds: bool,

    /// Print only the live market strip from --spot
    #[arg(long, default_value_t = false)]
    pub market: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,
}

/// Runs one simulation (or one per preset) as described by `args` and prints the report.
pub fn run(args: Cli) -> Result<()> {
    let reporter = build_report(&args)?;
    if !reporter.is_empty() {
        reporter.print_all();
    }
    Ok(())
}

/// Everything `run` would print, collected but not yet written out.
/// An empty price history yields an empty reporter.
pub fn build_report(args: &Cli) -> Result<ProtectionReporter> {
    let threshold = ProtectionThreshold::new(args.threshold)?;
    let days = args.window.days();
    let mut reporter = ProtectionReporter::new(args.format);

    let quotes = match &args.spot {
        Some(path) => data::load_spot_prices(path, args.asset.coin_id())?,
        None => Vec::new(),
    };

    if args.market {
        if args.spot.is_none() {
            bail!("--market needs a spot price document (--spot)");
        }
        reporter.add_quotes(&quotes)?;
        return Ok(reporter);
    }

    let live_price = args.spot.as_ref().and_then(|path| {
        let price = data::find_price(&quotes, args.asset.coin_id());
        if price.is_none() {
            log::warn!("No live price for {} in {}", args.asset, path.display());
        }
        price
    });

    let (title, series) = match &args.input {
        Some(path) => (
            format!("{} ({}) Last {} Days", args.asset, args.asset.symbol(), days),
            data::load_market_chart(path, days)?,
        ),
        None => (
            DEMO.title.to_string(),
            PricePoint::series_from_pairs(DEMO.series),
        ),
    };

    // Nothing to protect until a history is available.
    if series.is_empty() {
        log::warn!("Price history for {} is empty; skipping simulation", args.asset);
        return Ok(reporter);
    }

    log::info!(
        "Simulating {} samples of {} at {}",
        series.len(),
        args.asset,
        if args.all_thresholds {
            "every preset".to_string()
        } else {
            threshold.to_string()
        }
    );

    // The strip sits above the chart only in the human-readable layout.
    if args.format == OutputFormat::Table && !quotes.is_empty() {
        reporter.add_quotes(&quotes)?;
    }

    if args.all_thresholds {
        let runs = DrawdownProtectionSimulator::run_presets(&series);
        reporter.add_presets(&runs)?;
    } else {
        let run = DrawdownProtectionSimulator::run(&series, threshold);
        reporter.add_run(&title, &run, live_price)?;
    }

    Ok(reporter)
}
