//! Fixed-rate loan amortization
//!
//! Computes the level monthly payment for a loan and the period-by-period
//! breakdown of each payment into interest and principal, plus rate/term
//! sweeps and CSV/JSON export of the results.

pub mod amortization;
pub mod error;
pub mod export;
pub mod loan;
pub mod scenarios;

pub use amortization::{compute, try_compute, AmortizationSchedule};
pub use error::{Error, InputField, InvalidInput, Result};
pub use loan::{LoanInput, LoanParams, LoanSummary, PaymentRecord};
