//! Loan inputs and the records produced for each payment period

use crate::error::{InputField, InvalidInput};
use serde::{Deserialize, Serialize};

/// Validated inputs for a single amortization run.
///
/// Only [`LoanInput::new`] builds one, so every instance has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanInput {
    /// Amount borrowed, in currency units (> 0)
    principal: f64,

    /// Annual interest rate in percent (4.5 = 4.5%)
    annual_rate_percent: f64,

    /// Number of monthly payments (> 0)
    term_months: u32,
}

impl LoanInput {
    /// Validate raw numeric inputs as they arrive from a form or parser.
    ///
    /// The term is taken as `f64` so a fractional or non-finite value can be
    /// rejected here rather than silently truncated.
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        term_months: f64,
    ) -> Result<Self, InvalidInput> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(InvalidInput::new(
                InputField::Principal,
                principal,
                "must be a positive finite amount",
            ));
        }
        if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
            return Err(InvalidInput::new(
                InputField::AnnualRatePercent,
                annual_rate_percent,
                "must be a finite rate of at least 0",
            ));
        }
        if !term_months.is_finite() || term_months <= 0.0 {
            return Err(InvalidInput::new(
                InputField::TermMonths,
                term_months,
                "must be a positive number of months",
            ));
        }
        if term_months.fract() != 0.0 {
            return Err(InvalidInput::new(
                InputField::TermMonths,
                term_months,
                "must be a whole number of months",
            ));
        }
        if term_months > u32::MAX as f64 {
            return Err(InvalidInput::new(
                InputField::TermMonths,
                term_months,
                "exceeds the supported number of months",
            ));
        }

        Ok(Self {
            principal,
            annual_rate_percent,
            term_months: term_months as u32,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// Monthly periodic rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        crate::amortization::monthly_rate(self.annual_rate_percent)
    }
}

/// One row of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// 1-based period number
    pub payment_number: u32,
    pub payment_amount: f64,
    pub principal_amount: f64,
    pub interest_amount: f64,
    /// Balance after this payment, never negative
    pub remaining_balance: f64,
}

/// Headline figures for a loan.
///
/// Totals are nominal: they cover the full contractual term even when the
/// schedule retires the balance a period early.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: f64,
    /// monthly_payment × term_months
    pub total_payments: f64,
    /// total_payments − principal
    pub total_interest: f64,
    /// Same value as total_payments
    pub total_amount: f64,
}

impl LoanSummary {
    pub fn nominal(principal: f64, monthly_payment: f64, term_months: u32) -> Self {
        let total_payments = monthly_payment * term_months as f64;
        Self {
            monthly_payment,
            total_payments,
            total_interest: total_payments - principal,
            total_amount: total_payments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let input = LoanInput::new(250_000.0, 4.5, 360.0).expect("valid input");
        assert_eq!(input.term_months(), 360);
        assert_eq!(input.principal(), 250_000.0);
        assert_eq!(input.annual_rate_percent(), 4.5);
        assert!((input.monthly_rate() - 0.00375).abs() < 1e-12);
    }

    #[test]
    fn test_zero_rate_is_valid() {
        assert!(LoanInput::new(1200.0, 0.0, 12.0).is_ok());
    }

    #[test]
    fn test_rejected_fields() {
        let cases = [
            (0.0, 4.5, 360.0, InputField::Principal),
            (-10.0, 4.5, 360.0, InputField::Principal),
            (f64::NAN, 4.5, 360.0, InputField::Principal),
            (f64::INFINITY, 4.5, 360.0, InputField::Principal),
            (1000.0, -1.0, 360.0, InputField::AnnualRatePercent),
            (1000.0, f64::NAN, 360.0, InputField::AnnualRatePercent),
            (1000.0, f64::INFINITY, 360.0, InputField::AnnualRatePercent),
            (1000.0, 4.5, 0.0, InputField::TermMonths),
            (1000.0, 4.5, -12.0, InputField::TermMonths),
            (1000.0, 4.5, 12.5, InputField::TermMonths),
            (1000.0, 4.5, f64::NAN, InputField::TermMonths),
            (1000.0, 4.5, 1e12, InputField::TermMonths),
        ];

        for (principal, rate, term, field) in cases {
            let err = LoanInput::new(principal, rate, term).unwrap_err();
            assert_eq!(err.field, field, "inputs ({principal}, {rate}, {term})");
        }
    }

    #[test]
    fn test_nominal_summary() {
        let summary = LoanSummary::nominal(1000.0, 100.0, 12);
        assert_eq!(summary.total_payments, 1200.0);
        assert_eq!(summary.total_interest, 200.0);
        assert_eq!(summary.total_amount, summary.total_payments);
    }
}
