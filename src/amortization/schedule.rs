use crate::loan::{LoanSummary, PaymentRecord};
use serde::Serialize;

/// Result of an amortization run: a nominal summary and the emitted payments.
///
/// An empty schedule (no summary, no payments) stands for rejected input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AmortizationSchedule {
    summary: Option<LoanSummary>,
    payments: Vec<PaymentRecord>,
    /// Contractual number of periods, 0 for an empty schedule
    term_months: u32,
}

impl AmortizationSchedule {
    pub(crate) fn new(
        summary: LoanSummary,
        payments: Vec<PaymentRecord>,
        term_months: u32,
    ) -> Self {
        Self {
            summary: Some(summary),
            payments,
            term_months,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> Option<&LoanSummary> {
        self.summary.as_ref()
    }

    /// Payments ordered by payment number
    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    /// Balance after the last emitted payment
    pub fn final_balance(&self) -> Option<f64> {
        self.payments.last().map(|p| p.remaining_balance)
    }

    /// True when the balance hit zero before the contractual last period
    pub fn paid_off_early(&self) -> bool {
        !self.payments.is_empty() && self.payments.len() < self.term_months as usize
    }

    /// Principal repaid across the emitted payments
    pub fn principal_paid(&self) -> f64 {
        self.payments.iter().map(|p| p.principal_amount).sum()
    }

    /// Interest across the emitted payments.
    ///
    /// Differs from `LoanSummary::total_interest`, which is nominal over the full term.
    pub fn interest_paid(&self) -> f64 {
        self.payments.iter().map(|p| p.interest_amount).sum()
    }

    pub fn into_parts(self) -> (Option<LoanSummary>, Vec<PaymentRecord>) {
        (self.summary, self.payments)
    }
}
