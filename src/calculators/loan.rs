//! Loan payment and amortization schedule generation
//!
//! The schedule is built iteratively and is order-dependent: each month's
//! interest accrues on the running balance, the remainder of the level
//! payment retires principal, and the reduced balance carries into the next
//! month. With the closed-form payment the final balance converges to ~0.

use log::debug;
use serde::{Deserialize, Serialize};

use super::report::{CalculationReport, Field};
use crate::duration::Duration;
use crate::error::FinanceError;

/// Inputs for a loan calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: f64,
    /// Annual rate in percent
    pub rate_pct: f64,
    /// Loan term; truncated to whole months
    pub duration: Duration,
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Month number, 1-indexed
    pub month: u32,
    /// Balance at the start of the month
    pub start_balance: f64,
    /// Level payment for the month
    pub payment: f64,
    /// Portion of the payment retiring principal
    pub principal: f64,
    /// Portion of the payment covering interest
    pub interest: f64,
    /// Balance carried into the next month
    pub end_balance: f64,
}

/// Aggregate figures for the whole loan
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanSummary {
    pub principal: f64,
    pub rate_pct: f64,
    pub term_months: u32,
    /// Level monthly payment
    pub payment: f64,
    pub total_interest: f64,
    pub total_cost: f64,
}

/// Complete loan result: summary plus the full ordered schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    pub summary: LoanSummary,
    pub schedule: Vec<AmortizationRow>,
}

/// Calculate the level payment and generate the amortization schedule.
///
/// The term is `floor(years * 12)` months. A zero duration, or one shorter
/// than a single month, produces no schedule and is rejected before any
/// arithmetic runs.
pub fn amortize(input: &LoanInput) -> Result<LoanResult, FinanceError> {
    let years = input.duration.total_years();
    if years == 0.0 {
        return Err(FinanceError::Validation(
            "loan term must be positive".to_string(),
        ));
    }
    let term_months = (years * 12.0).floor() as u32;
    if term_months == 0 {
        return Err(FinanceError::Validation(format!(
            "loan term of {years:.4} years is shorter than one month"
        )));
    }

    let monthly_rate = input.rate_pct / 100.0 / 12.0;
    let payment = if monthly_rate == 0.0 {
        input.principal / term_months as f64
    } else {
        let growth = (1.0 + monthly_rate).powi(term_months as i32);
        input.principal * monthly_rate * growth / (growth - 1.0)
    };

    let mut schedule = Vec::with_capacity(term_months as usize);
    let mut balance = input.principal;
    for month in 1..=term_months {
        let interest = balance * monthly_rate;
        let principal = payment - interest;
        let start_balance = balance;
        balance -= principal;
        schedule.push(AmortizationRow {
            month,
            start_balance,
            payment,
            principal,
            interest,
            // abs() clamps the tiny negative residue the final month can leave
            end_balance: balance.abs(),
        });
    }

    let total_cost = payment * term_months as f64;
    debug!("amortized {term_months} months at {monthly_rate} monthly, payment {payment:.2}");

    Ok(LoanResult {
        summary: LoanSummary {
            principal: input.principal,
            rate_pct: input.rate_pct,
            term_months,
            payment,
            total_interest: total_cost - input.principal,
            total_cost,
        },
        schedule,
    })
}

impl LoanSummary {
    /// Labeled summary fields in export order
    pub fn report(&self) -> CalculationReport {
        let mut report = CalculationReport::new();
        report.push("Loan Amount", Field::Number(self.principal));
        report.push("Rate", Field::Text(format!("{}%", self.rate_pct)));
        report.push("Months", Field::Count(self.term_months));
        report.push("PMT", Field::Fixed(self.payment));
        report.push("Total Interest", Field::Fixed(self.total_interest));
        report.push("Total Cost", Field::Fixed(self.total_cost));
        report
    }
}
