//! Loan parameters as supplied by a caller
//!
//! Parameters are the raw, unvalidated form inputs. They deserialize from JSON
//! with defaults for any missing field, and are validated into a `LoanInput`
//! only when a schedule is requested.

use super::LoanInput;
use crate::error::{Error, InvalidInput, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw loan parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParams {
    /// Loan amount in currency units
    /// Default: 250,000
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Annual interest rate in percent (4.5 = 4.5%)
    #[serde(default = "default_annual_rate_percent")]
    pub annual_rate_percent: f64,

    /// Term in months
    /// Kept as f64 so fractional terms reach validation instead of failing to parse
    #[serde(default = "default_term_months")]
    pub term_months: f64,
}

fn default_principal() -> f64 { 250_000.0 }
fn default_annual_rate_percent() -> f64 { 4.5 }
fn default_term_months() -> f64 { 360.0 }

impl Default for LoanParams {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            annual_rate_percent: default_annual_rate_percent(),
            term_months: default_term_months(),
        }
    }
}

impl LoanParams {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load parameters from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let params = Self::from_json_str(&contents)?;
        log::debug!("Loaded loan params from {}: {:?}", path.display(), params);
        Ok(params)
    }

    /// Replace any field for which an override is given
    pub fn with_overrides(
        mut self,
        principal: Option<f64>,
        annual_rate_percent: Option<f64>,
        term_months: Option<f64>,
    ) -> Self {
        if let Some(p) = principal {
            self.principal = p;
        }
        if let Some(r) = annual_rate_percent {
            self.annual_rate_percent = r;
        }
        if let Some(t) = term_months {
            self.term_months = t;
        }
        self
    }

    pub fn to_input(&self) -> std::result::Result<LoanInput, InvalidInput> {
        LoanInput::new(self.principal, self.annual_rate_percent, self.term_months)
    }
}
