//! Loan data structures and parameter loading

mod data;
pub mod params;

pub use data::{LoanInput, PaymentRecord, LoanSummary};
pub use params::LoanParams;
