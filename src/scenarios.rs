//! Rate and term sweeps
//!
//! Evaluates one principal across a grid of annual rates and terms. Each grid
//! point is an independent amortization, so the grid is computed in parallel.

use crate::amortization::try_compute;
use crate::error::{InputField, InvalidInput};
use crate::loan::LoanSummary;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Largest grid (rates × terms) a sweep will evaluate
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// Grid definition for a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepParams {
    pub principal: f64,

    /// First annual rate in percent
    pub rate_start: f64,

    /// Last annual rate in percent (inclusive)
    pub rate_end: f64,

    /// Rate increment in percentage points
    #[serde(default = "default_rate_step")]
    pub rate_step: f64,

    /// Terms in months
    #[serde(default = "default_terms")]
    pub terms: Vec<u32>,
}

fn default_rate_step() -> f64 { 0.25 }
fn default_terms() -> Vec<u32> { vec![180, 360] }

/// One evaluated grid point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub annual_rate_percent: f64,
    pub term_months: u32,
    /// None when the point itself is not a valid loan (e.g. zero term)
    pub summary: Option<LoanSummary>,
    /// Number of payments actually emitted
    pub payment_count: usize,
}

impl SweepParams {
    /// Rates on the grid, start to end inclusive.
    ///
    /// Each rate is `start + k·step` rather than an accumulated sum, so the grid
    /// does not drift.
    pub fn rates(&self) -> Result<Vec<f64>, InvalidInput> {
        let steps = self.rate_steps()?;
        Ok((0..=steps)
            .map(|k| self.rate_start + k as f64 * self.rate_step)
            .filter(|r| *r <= self.rate_end + self.rate_step * 1e-9)
            .collect())
    }

    /// Number of increments between start and end, checked against the grid limit
    fn rate_steps(&self) -> Result<usize, InvalidInput> {
        if !self.rate_step.is_finite() || self.rate_step <= 0.0 {
            return Err(InvalidInput::new(
                InputField::RateStep,
                self.rate_step,
                "rate step must be a positive number of percentage points",
            ));
        }
        if !self.rate_start.is_finite()
            || !self.rate_end.is_finite()
            || self.rate_end < self.rate_start
        {
            return Err(InvalidInput::new(
                InputField::AnnualRatePercent,
                self.rate_end,
                "rate end must not be below rate start",
            ));
        }

        // Half-step slack keeps rate_end on the grid despite rounding
        let steps = ((self.rate_end - self.rate_start) / self.rate_step + 0.5).floor();
        let points = (steps + 1.0) * self.terms.len().max(1) as f64;
        if points > MAX_SWEEP_POINTS as f64 {
            return Err(InvalidInput::new(
                InputField::SweepGrid,
                points,
                "sweep grid has too many points",
            ));
        }
        Ok(steps as usize)
    }

    fn points(&self) -> Result<Vec<(u32, f64)>, InvalidInput> {
        if self.terms.is_empty() {
            return Err(InvalidInput::new(
                InputField::TermMonths,
                0.0,
                "at least one term is required",
            ));
        }
        let rates = self.rates()?;
        Ok(self
            .terms
            .iter()
            .flat_map(|&term| rates.iter().map(move |&rate| (term, rate)))
            .collect())
    }
}

/// Evaluate every (term, rate) point of the grid, ordered by term then rate
pub fn run_sweep(params: &SweepParams) -> Result<Vec<SweepRow>, InvalidInput> {
    let points = params.points()?;
    log::info!(
        "Running sweep of {} points for principal {:.2}",
        points.len(),
        params.principal
    );

    let rows = points
        .par_iter()
        .map(|&(term_months, annual_rate_percent)| {
            match try_compute(params.principal, annual_rate_percent, term_months as f64) {
                Ok(schedule) => SweepRow {
                    annual_rate_percent,
                    term_months,
                    summary: schedule.summary().copied(),
                    payment_count: schedule.len(),
                },
                Err(err) => {
                    log::warn!("Sweep point skipped: {}", err);
                    SweepRow {
                        annual_rate_percent,
                        term_months,
                        summary: None,
                        payment_count: 0,
                    }
                }
            }
        })
        .collect();

    Ok(rows)
}
