//! Error types for loan validation, parameter loading and export

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The loan input that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Principal,
    AnnualRatePercent,
    TermMonths,
    /// Increment of a rate sweep
    RateStep,
    /// Size of a sweep grid
    SweepGrid,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::Principal => "principal",
            InputField::AnnualRatePercent => "annual_rate_percent",
            InputField::TermMonths => "term_months",
            InputField::RateStep => "rate_step",
            InputField::SweepGrid => "sweep_grid",
        };
        f.write_str(name)
    }
}

/// A rejected loan input. This is the only way a calculation can fail.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {value} ({reason})")]
pub struct InvalidInput {
    pub field: InputField,
    pub value: f64,
    pub reason: &'static str,
}

impl InvalidInput {
    pub fn new(field: InputField, value: f64, reason: &'static str) -> Self {
        Self { field, value, reason }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
