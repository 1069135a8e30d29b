use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::analysis::ProtectionRun;
use crate::data::CryptoQuote;
use crate::models::ProtectionSummary;

use super::format::{format_signed_pct, format_usd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Date")]
    label: String,
    #[tabled(rename = "Market Price")]
    price: String,
    #[tabled(rename = "Protected Value")]
    protected_value: String,
    #[tabled(rename = "Drawdown")]
    drawdown: String,
    #[tabled(rename = "Shield")]
    shield: &'static str,
}

#[derive(Tabled)]
struct PresetRow {
    #[tabled(rename = "Trigger")]
    threshold: String,
    #[tabled(rename = "Exit At")]
    exit: String,
    #[tabled(rename = "Without Protection")]
    market: String,
    #[tabled(rename = "With RiskShield")]
    protected: String,
    #[tabled(rename = "Losses Avoided")]
    avoided: String,
}

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Coin")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "24h")]
    change: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    live_price: Option<f64>,
    #[serde(flatten)]
    run: &'a ProtectionRun,
}

/// Collects rendered sections and prints them in one go.
pub struct ProtectionReporter {
    format: OutputFormat,
    buffer: Vec<String>,
}

impl ProtectionReporter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            buffer: Vec::new(),
        }
    }

    pub fn add_run(&mut self, title: &str, run: &ProtectionRun, live_price: Option<f64>) -> Result<()> {
        match self.format {
            OutputFormat::Table => {
                self.buffer.push(Self::headline(title, run, live_price));
                self.buffer.push(Self::points_table(run));
                self.buffer.extend(Self::summary_lines(&run.summary));
            }
            OutputFormat::Csv => {
                self.buffer.extend(Self::csv_lines(run));
            }
            OutputFormat::Json => {
                let report = JsonReport {
                    title,
                    live_price,
                    run,
                };
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize protection run")?;
                self.buffer.push(json);
            }
        }
        Ok(())
    }

    pub fn add_presets(&mut self, runs: &[ProtectionRun]) -> Result<()> {
        match self.format {
            OutputFormat::Table => self.buffer.push(Self::presets_table(runs)),
            OutputFormat::Csv => {
                self.buffer
                    .push("Threshold,Trigger_Idx,Market_Pct,Protected_Pct,Avoided_Pct".to_string());
                for run in runs {
                    let s = &run.summary;
                    self.buffer.push(format!(
                        "{},{},{:.2},{:.2},{:.2}",
                        run.threshold.value(),
                        s.trigger_index.map(|i| i.to_string()).unwrap_or_default(),
                        s.market_change_pct,
                        s.protected_change_pct,
                        s.losses_avoided_pct
                    ));
                }
            }
            OutputFormat::Json => {
                let summaries: Vec<(f64, &ProtectionSummary)> = runs
                    .iter()
                    .map(|run| (run.threshold.value(), &run.summary))
                    .collect();
                let json = serde_json::to_string_pretty(&summaries)
                    .context("Failed to serialize preset summaries")?;
                self.buffer.push(json);
            }
        }
        Ok(())
    }

    /// The live market strip. Coins without a usable price show a dash.
    pub fn add_quotes(&mut self, quotes: &[CryptoQuote]) -> Result<()> {
        match self.format {
            OutputFormat::Table => {
                let rows: Vec<QuoteRow> = quotes
                    .iter()
                    .map(|q| QuoteRow {
                        name: format!("{} {}", q.icon, q.name).trim().to_string(),
                        symbol: q.symbol.clone(),
                        price: if q.price > 0.0 {
                            format_usd(q.price)
                        } else {
                            "-".to_string()
                        },
                        change: format_signed_pct(q.change_24h_pct),
                    })
                    .collect();
                self.buffer.push(Table::new(rows).with(Style::rounded()).to_string());
            }
            OutputFormat::Csv => {
                self.buffer.push("Id,Symbol,Price,Change_24h_Pct".to_string());
                for q in quotes {
                    self.buffer.push(format!(
                        "{},{},{:.2},{:.2}",
                        q.id, q.symbol, q.price, q.change_24h_pct
                    ));
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(quotes)
                    .context("Failed to serialize spot quotes")?;
                self.buffer.push(json);
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn render(&self) -> String {
        self.buffer.join("\n")
    }

    pub fn print_all(&self) {
        println!("{}", self.render());
    }

    fn headline(title: &str, run: &ProtectionRun, live_price: Option<f64>) -> String {
        let mut line = title.to_string();
        if let Some(price) = live_price {
            line.push_str(&format!("  Live: {}", format_usd(price)));
        }
        if !run.points.is_empty() {
            line.push_str(&format!("  Peak: {}", format_usd(run.summary.all_time_high)));
        }
        line.push_str(&format!("  Trigger: {}", run.threshold));
        line
    }

    fn points_table(run: &ProtectionRun) -> String {
        let rows: Vec<PointRow> = run
            .points
            .iter()
            .map(|p| PointRow {
                label: p.label.clone(),
                price: format_usd(p.display_price()),
                protected_value: format_usd(p.display_protected_value()),
                drawdown: format!("{:.1}%", p.display_drawdown_pct()),
                shield: if p.triggered { "🛡" } else { "" },
            })
            .collect();
        Table::new(rows).with(Style::rounded()).to_string()
    }

    /// The comparison badges. "Losses Avoided" only appears when positive.
    pub fn summary_lines(summary: &ProtectionSummary) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Without Protection: {}",
                format_signed_pct(summary.market_change_pct)
            ),
            format!(
                "With RiskShield:    {}",
                format_signed_pct(summary.protected_change_pct)
            ),
        ];
        if let Some(avoided) = summary.losses_avoided() {
            lines.push(format!("Losses Avoided:     +{:.2}%", avoided));
        }
        lines
    }

    fn csv_lines(run: &ProtectionRun) -> Vec<String> {
        let mut lines =
            vec!["Label,Price,Protected_Value,All_Time_High,Drawdown_Pct,Triggered".to_string()];
        lines.extend(run.points.iter().map(|p| {
            format!(
                "{},{:.2},{:.2},{:.2},{:.1},{}",
                p.label.replace(',', " "),
                p.price,
                p.protected_value,
                p.all_time_high,
                p.drawdown_pct,
                p.triggered
            )
        }));
        lines
    }

    fn presets_table(runs: &[ProtectionRun]) -> String {
        let rows: Vec<PresetRow> = runs
            .iter()
            .map(|run| {
                let s = &run.summary;
                PresetRow {
                    threshold: run.threshold.to_string(),
                    exit: s
                        .trigger_index
                        .map(|idx| {
                            let p = &run.points[idx];
                            format!("{} ({})", format_usd(p.display_protected_value()), p.label)
                        })
                        .unwrap_or_else(|| "never".to_string()),
                    market: format_signed_pct(s.market_change_pct),
                    protected: format_signed_pct(s.protected_change_pct),
                    avoided: s
                        .losses_avoided()
                        .map(|a| format!("+{:.2}%", a))
                        .unwrap_or_else(|| "-".to_string()),
                }
            })
            .collect();
        Table::new(rows).with(Style::rounded()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DrawdownProtectionSimulator;
    use crate::config::ProtectionThreshold;
    use crate::domain::PricePoint;

    fn sample_run() -> ProtectionRun {
        let series =
            PricePoint::series_from_pairs(&[("Jan 1", 100.0), ("Jan 2", 90.0), ("Jan 3", 50.0)]);
        DrawdownProtectionSimulator::run(&series, ProtectionThreshold::new(10.0).unwrap())
    }

    #[test]
    fn test_summary_lines_show_losses_avoided() {
        let lines = ProtectionReporter::summary_lines(&sample_run().summary);
        assert_eq!(
            lines,
            vec![
                "Without Protection: -50.00%".to_string(),
                "With RiskShield:    -10.00%".to_string(),
                "Losses Avoided:     +40.00%".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_lines_hide_non_positive_savings() {
        let summary = ProtectionSummary::default();
        assert_eq!(ProtectionReporter::summary_lines(&summary).len(), 2);
    }

    #[test]
    fn test_table_output() {
        let mut reporter = ProtectionReporter::new(OutputFormat::Table);
        reporter.add_run("ETH (3D)", &sample_run(), Some(3120.75)).unwrap();
        let out = reporter.render();
        assert!(out.starts_with("ETH (3D)  Live: $3,120.75  Peak: $100.00  Trigger: -10%"));
        assert!(out.contains("Protected Value"));
        assert!(out.contains("50.0%"));
        assert!(out.contains("Losses Avoided"));
    }

    #[test]
    fn test_csv_output() {
        let mut reporter = ProtectionReporter::new(OutputFormat::Csv);
        reporter.add_run("ignored", &sample_run(), None).unwrap();
        let out = reporter.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "Jan 1,100.00,100.00,100.00,0.0,false");
        assert_eq!(lines[2], "Jan 2,90.00,90.00,100.00,10.0,true");
        assert_eq!(lines[3], "Jan 3,50.00,90.00,100.00,50.0,true");
    }

    #[test]
    fn test_json_output() {
        let mut reporter = ProtectionReporter::new(OutputFormat::Json);
        reporter.add_run("ETH", &sample_run(), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&reporter.render()).unwrap();
        assert_eq!(value["title"], "ETH");
        assert_eq!(value["threshold"], 10.0);
        assert_eq!(value["points"][2]["protected_value"], 90.0);
        assert_eq!(value["points"][1]["triggered"], true);
        assert_eq!(value["points"][0]["triggered"], false);
        assert_eq!(value["summary"]["losses_avoided_pct"], 40.0);
        assert!(value["live_price"].is_null());
    }

    #[test]
    fn test_quotes_table() {
        let quotes = crate::data::parse_spot_prices_with(
            r#"{"bitcoin": {"usd": 67250.5, "usd_24h_change": -1.25}}"#,
            "wrapped-bitcoin",
        )
        .unwrap();
        let mut reporter = ProtectionReporter::new(OutputFormat::Table);
        reporter.add_quotes(&quotes).unwrap();
        let out = reporter.render();
        assert!(out.contains("₿ Bitcoin"));
        assert!(out.contains("$67,250.50"));
        assert!(out.contains("-1.25%"));
        assert!(out.contains("AVAX"));
        assert!(out.contains("WBTC"));
    }

    #[test]
    fn test_quotes_csv() {
        let quotes =
            crate::data::parse_spot_prices_for(r#"{"solana": {"usd": 142.5}}"#, &["solana"])
                .unwrap();
        let mut reporter = ProtectionReporter::new(OutputFormat::Csv);
        reporter.add_quotes(&quotes).unwrap();
        assert_eq!(
            reporter.render(),
            "Id,Symbol,Price,Change_24h_Pct\nsolana,SOL,142.50,0.00"
        );
    }

    #[test]
    fn test_presets_table() {
        let series = PricePoint::series_from_prices(&[100.0, 94.0, 85.0, 70.0]);
        let runs = DrawdownProtectionSimulator::run_presets(&series);
        let mut reporter = ProtectionReporter::new(OutputFormat::Table);
        reporter.add_presets(&runs).unwrap();
        let out = reporter.render();
        assert!(out.contains("-5%"));
        assert!(out.contains("-20%"));
        assert!(out.contains("$94.00 (1)"));
        assert!(out.contains("$70.00 (3)"));
    }
}
