//! Fixed-payment amortization
//!
//! Turns a principal, an annual rate and a term into the level monthly payment
//! and the period-by-period split of that payment into interest and principal.
//! Every call starts from scratch and touches nothing but its own inputs, so the
//! functions here are safe to call from any number of threads.

use super::{AmortizationSchedule, PERIODS_PER_YEAR};
use crate::error::InvalidInput;
use crate::loan::{LoanInput, LoanSummary, PaymentRecord};

/// Upper bound on the up-front allocation for the payment vector
const MAX_PREALLOCATED_PERIODS: u32 = 1200;

/// Convert an annual percentage rate into the monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / PERIODS_PER_YEAR as f64
}

/// Level payment that retires `principal` over `term_months` at monthly rate `rate`.
///
/// A zero rate is straight-line repayment. Otherwise this is the annuity formula
/// `P·r·(1+r)^n / ((1+r)^n − 1)`, with the growth factor built from
/// `ln_1p`/`exp_m1` so very small rates do not collapse the denominator to zero.
pub fn monthly_payment(principal: f64, rate: f64, term_months: u32) -> f64 {
    let n = term_months as f64;
    if rate == 0.0 {
        return principal / n;
    }

    let growth_less_one = (n * rate.ln_1p()).exp_m1();
    let growth = growth_less_one + 1.0;
    if growth.is_infinite() {
        // (1+r)^n / ((1+r)^n − 1) → 1 for very long terms
        return principal * rate;
    }

    principal * (rate / growth_less_one) * growth
}

/// Build the schedule for an already validated input
pub fn amortize(input: &LoanInput) -> AmortizationSchedule {
    let rate = input.monthly_rate();
    let term_months = input.term_months();
    let payment = monthly_payment(input.principal(), rate, term_months);
    let summary = LoanSummary::nominal(input.principal(), payment, term_months);
    let payments = emit_payments(input.principal(), rate, payment, term_months);

    log::debug!(
        "Amortized {:.2} at {}% over {} months: payment {:.6}, {} records",
        input.principal(),
        input.annual_rate_percent(),
        term_months,
        payment,
        payments.len()
    );

    AmortizationSchedule::new(summary, payments, term_months)
}

/// Run the balance recurrence with a fixed payment.
///
/// Stops after the first record whose balance is exactly 0. The record for the
/// last contractual period always carries a balance of 0; its principal and
/// interest portions are left as the recurrence computed them.
fn emit_payments(
    principal: f64,
    rate: f64,
    payment: f64,
    term_months: u32,
) -> Vec<PaymentRecord> {
    let capacity = term_months.min(MAX_PREALLOCATED_PERIODS) as usize;
    let mut payments = Vec::with_capacity(capacity);
    let mut balance = principal;

    for payment_number in 1..=term_months {
        let interest_amount = balance * rate;
        let principal_amount = payment - interest_amount;
        balance = if payment_number == term_months {
            0.0
        } else {
            (balance - principal_amount).max(0.0)
        };

        payments.push(PaymentRecord {
            payment_number,
            payment_amount: payment,
            principal_amount,
            interest_amount,
            remaining_balance: balance,
        });

        if balance == 0.0 {
            break;
        }
    }

    payments
}

/// Validate raw inputs and build the schedule, reporting which field was rejected
pub fn try_compute(
    principal: f64,
    annual_rate_percent: f64,
    term_months: f64,
) -> Result<AmortizationSchedule, InvalidInput> {
    let input = LoanInput::new(principal, annual_rate_percent, term_months)?;
    Ok(amortize(&input))
}

/// Build the schedule, or an empty one if any input is invalid.
///
/// Invalid input is not an error here: the result simply has no summary and no
/// payments. Use [`try_compute`] to find out what was wrong.
pub fn compute(
    principal: f64,
    annual_rate_percent: f64,
    term_months: f64,
) -> AmortizationSchedule {
    match try_compute(principal, annual_rate_percent, term_months) {
        Ok(schedule) => schedule,
        Err(err) => {
            log::debug!("Returning empty schedule: {}", err);
            AmortizationSchedule::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        assert!((monthly_rate(4.5) - 0.00375).abs() < 1e-15);
        assert_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_monthly_payment_standard_mortgage() {
        let payment = monthly_payment(250_000.0, monthly_rate(4.5), 360);
        assert!((payment - 1266.71).abs() < 0.005);
    }

    #[test]
    fn test_monthly_payment_matches_closed_form() {
        let (principal, rate, n) = (18_000.0, monthly_rate(7.25), 60u32);
        let growth = (1.0 + rate).powi(n as i32);
        let expected = principal * rate * growth / (growth - 1.0);
        assert!((monthly_payment(principal, rate, n) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_payment_zero_rate() {
        assert_eq!(monthly_payment(1200.0, 0.0, 12), 100.0);
    }

    #[test]
    fn test_monthly_payment_tiny_rate_is_straight_line() {
        // 1 + r rounds to 1 in f64, the payment must still be finite
        let payment = monthly_payment(1200.0, 1e-18, 12);
        assert!(payment.is_finite());
        assert!((payment - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_payment_single_period() {
        // One period: repay principal plus one month of interest
        let rate = monthly_rate(12.0);
        let payment = monthly_payment(1000.0, rate, 1);
        assert!((payment - 1010.0).abs() < 1e-9);
    }

    #[test]
    fn test_schedule_shape() {
        let schedule = compute(10_000.0, 6.0, 24.0);
        let summary = schedule.summary().expect("valid input has a summary");

        assert_eq!(schedule.len(), 24);
        for (i, record) in schedule.payments().iter().enumerate() {
            assert_eq!(record.payment_number, i as u32 + 1);
            assert_eq!(record.payment_amount, summary.monthly_payment);
            let split = record.principal_amount + record.interest_amount;
            assert!((split - record.payment_amount).abs() < 1e-9);
        }
        assert_eq!(schedule.final_balance(), Some(0.0));
    }

    #[test]
    fn test_first_period_interest() {
        let schedule = compute(100_000.0, 6.0, 360.0);
        let first = schedule.payments()[0];
        assert!((first.interest_amount - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs_are_empty() {
        assert!(compute(0.0, 4.5, 360.0).is_empty());
        assert!(compute(1000.0, -1.0, 360.0).is_empty());
        assert!(compute(1000.0, 4.5, 0.0).is_empty());
        assert!(compute(1000.0, 4.5, 12.5).is_empty());
        assert!(compute(f64::NAN, 4.5, 12.0).is_empty());
        assert!(compute(1000.0, 4.5, 0.0).summary().is_none());
    }

    #[test]
    fn test_try_compute_reports_field() {
        use crate::error::InputField;

        let err = try_compute(1000.0, -1.0, 12.0).unwrap_err();
        assert_eq!(err.field, InputField::AnnualRatePercent);
        assert_eq!(err.value, -1.0);
    }

    #[test]
    fn test_balance_clamped_at_zero() {
        // Overpayment in the last period must not leave a negative balance
        let schedule = compute(1000.0, 3.0, 7.0);
        assert!(schedule.payments().iter().all(|p| p.remaining_balance >= 0.0));
    }

    #[test]
    fn test_last_period_settles_to_zero() {
        // These leave a residue of order 1e-12 before the last period is settled
        let loans = [(18_000.0, 7.25, 60.0), (10_000.0, 6.0, 24.0), (1000.0, 3.0, 7.0)];
        for (principal, rate, term) in loans {
            let schedule = compute(principal, rate, term);
            assert_eq!(schedule.len(), term as usize);
            assert_eq!(schedule.final_balance(), Some(0.0));
            let last = schedule.payments()[schedule.len() - 1];
            let split = last.principal_amount + last.interest_amount;
            assert!((split - last.payment_amount).abs() < 1e-9);
        }
    }

    #[test]
    fn test_recurrence_stops_when_balance_hits_zero() {
        // The annuity payment retires the balance only in the last period, so an
        // early stop needs a payment above the annuity amount. Drive the loop directly.
        let payments = emit_payments(1000.0, 0.0, 400.0, 5);
        assert_eq!(payments.len(), 3);
        assert_eq!(payments[1].remaining_balance, 200.0);
        assert_eq!(payments[2].remaining_balance, 0.0);
        assert_eq!(payments[2].principal_amount, 400.0);

        let rate = monthly_rate(12.0);
        let payments = emit_payments(1000.0, rate, 600.0, 10);
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[1].remaining_balance, 0.0);
        assert!((payments[1].interest_amount - 4.1).abs() < 1e-9);
    }

    #[test]
    fn test_early_stop_keeps_nominal_summary() {
        let rate = monthly_rate(12.0);
        let payments = emit_payments(1000.0, rate, 600.0, 10);
        let summary = LoanSummary::nominal(1000.0, 600.0, 10);
        let schedule = AmortizationSchedule::new(summary, payments, 10);

        assert!(schedule.paid_off_early());
        let summary = schedule.summary().expect("summary");
        assert_eq!(summary.total_payments, 6000.0);
        assert_eq!(summary.total_interest, 5000.0);
        assert!((schedule.interest_paid() - 14.1).abs() < 1e-9);
    }

    #[test]
    fn test_zero_term_never_produces_summary() {
        use crate::loan::LoanParams;

        let params = LoanParams { term_months: 0.0, ..LoanParams::default() };
        assert!(params.to_input().is_err());
        assert!(compute(1000.0, 4.5, 0.0).summary().is_none());
        assert!(try_compute(1000.0, 4.5, 0.0).is_err());
    }
}
