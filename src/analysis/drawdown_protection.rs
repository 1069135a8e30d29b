//! Drawdown protection simulation.
//!
//! Replays an already-observed price history and shows what a position would
//! have been worth had it been exited the first time the price sat
//! `threshold` percent or more below the period's high.
//!
//! The high is the maximum of the WHOLE series, found in hindsight before the
//! replay starts, not a running maximum. A sample early in the window can
//! therefore trigger against a peak that only arrives later. This is what the
//! protection chart is meant to show, so the two passes must stay separate.

use serde::Serialize;

use crate::config::{DF, ProtectionThreshold};
use crate::domain::PricePoint;
use crate::models::{AnnotatedPoint, ProtectionSummary};
use crate::utils::{drawdown_pct, get_max};

/// Annotated series plus its headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtectionRun {
    pub threshold: ProtectionThreshold,
    pub points: Vec<AnnotatedPoint>,
    pub summary: ProtectionSummary,
}

/// Stateless namespace for the simulation; every call starts from scratch.
pub struct DrawdownProtectionSimulator;

impl DrawdownProtectionSimulator {
    /// Annotate every sample of `series` with its drawdown from the period
    /// high and the protected value under `threshold`.
    ///
    /// Returns exactly one point per input sample; an empty series gives an
    /// empty result.
    pub fn simulate(series: &[PricePoint], threshold: ProtectionThreshold) -> Vec<AnnotatedPoint> {
        if series.is_empty() {
            return Vec::new();
        }

        // Pass 1: the period high, in hindsight.
        let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
        let all_time_high = get_max(&prices);

        // Pass 2: one-way Unprotected -> Protected replay.
        let mut locked_exit: Option<f64> = None;
        let points: Vec<AnnotatedPoint> = series
            .iter()
            .map(|point| {
                let drawdown = drawdown_pct(all_time_high, point.price);

                if locked_exit.is_none() && drawdown >= threshold.value() {
                    locked_exit = Some(point.price);
                }

                AnnotatedPoint {
                    label: point.label.clone(),
                    price: point.price,
                    all_time_high,
                    drawdown_pct: drawdown,
                    protected_value: locked_exit.unwrap_or(point.price),
                    triggered: locked_exit.is_some(),
                }
            })
            .collect();

        if DF.log_simulation_events {
            match points.iter().position(|p| p.triggered) {
                Some(idx) => log::debug!(
                    "Protection at {} triggered at #{} ({}) exit {:.2}, peak {:.2}",
                    threshold,
                    idx,
                    points[idx].label,
                    points[idx].protected_value,
                    all_time_high
                ),
                None => log::debug!(
                    "Protection at {} never triggered over {} samples, peak {:.2}",
                    threshold,
                    points.len(),
                    all_time_high
                ),
            }
        }

        points
    }

    /// [`Self::simulate`] plus the summary statistics for the run.
    pub fn run(series: &[PricePoint], threshold: ProtectionThreshold) -> ProtectionRun {
        let points = crate::trace_time!("simulate", series.len(), DF.sample_budget_nanos, {
            Self::simulate(series, threshold)
        });
        let summary = ProtectionSummary::from_points(&points);
        ProtectionRun {
            threshold,
            points,
            summary,
        }
    }

    /// One run per preset threshold, in preset order.
    pub fn run_presets(series: &[PricePoint]) -> Vec<ProtectionRun> {
        ProtectionThreshold::presets()
            .map(|threshold| Self::run(series, threshold))
            .collect()
    }
}

/// Shorthand for [`DrawdownProtectionSimulator::simulate`].
pub fn simulate(series: &[PricePoint], threshold: ProtectionThreshold) -> Vec<AnnotatedPoint> {
    DrawdownProtectionSimulator::simulate(series, threshold)
}
