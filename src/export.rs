//! CSV and JSON output for schedules and sweeps
//!
//! Values are written as computed. Rounding for display belongs to whoever
//! renders the output.

use crate::amortization::AmortizationSchedule;
use crate::error::Result;
use crate::scenarios::SweepRow;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::Write;

/// Flat CSV row for one sweep point
#[derive(Debug, Serialize)]
struct SweepCsvRow {
    annual_rate_percent: f64,
    term_months: u32,
    monthly_payment: Option<f64>,
    total_payments: Option<f64>,
    total_interest: Option<f64>,
    payment_count: usize,
}

/// Write one CSV row per payment, with a header row
pub fn write_schedule_csv<W: Write>(writer: W, schedule: &AmortizationSchedule) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in schedule.payments() {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write one CSV row per sweep point. Invalid points leave the money columns blank.
pub fn write_sweep_csv<W: Write>(writer: W, rows: &[SweepRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(SweepCsvRow {
            annual_rate_percent: row.annual_rate_percent,
            term_months: row.term_months,
            monthly_payment: row.summary.map(|s| s.monthly_payment),
            total_payments: row.summary.map(|s| s.total_payments),
            total_interest: row.summary.map(|s| s.total_interest),
            payment_count: row.payment_count,
        })?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Summary and payments as a single JSON document
pub fn schedule_json(schedule: &AmortizationSchedule) -> Value {
    json!({
        "summary": schedule.summary(),
        "payments": schedule.payments(),
    })
}
