//! Amortization engine for fixed-rate, fixed-term loans

mod engine;
mod schedule;

pub use engine::{amortize, compute, try_compute, monthly_payment, monthly_rate};
pub use schedule::AmortizationSchedule;

/// Payment periods per year. Schedules are monthly only.
pub const PERIODS_PER_YEAR: u32 = 12;
