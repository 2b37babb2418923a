//! Compound interest with a configurable compounding frequency

use serde::{Deserialize, Serialize};

use super::report::{CalculationReport, Field};
use crate::duration::Duration;
use crate::error::FinanceError;

/// Standard monthly compounding
pub const DEFAULT_COMPOUNDS_PER_YEAR: f64 = 12.0;

/// Inputs for a compound interest calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    /// Principal amount
    pub principal: f64,
    /// Annual rate in percent
    pub rate_pct: f64,
    /// Compounding periods per year; must be positive
    pub compounds_per_year: f64,
    /// Investment duration
    pub duration: Duration,
}

/// Result of a compound interest calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub principal: f64,
    pub rate_pct: f64,
    pub compounds_per_year: f64,
    pub years: f64,
    pub amount: f64,
    pub interest: f64,
}

/// `amount = P * (1 + R/(100*N))^(N*T)`, `interest = amount - P`
///
/// `N <= 0` would divide by zero inside the base and is rejected up front.
pub fn compound_interest(
    input: &CompoundInterestInput,
) -> Result<CompoundInterestResult, FinanceError> {
    let n = input.compounds_per_year;
    if !n.is_finite() || n <= 0.0 {
        return Err(FinanceError::Validation(format!(
            "compounds per year must be positive, got {n}"
        )));
    }

    let years = input.duration.total_years();
    let amount = input.principal * (1.0 + input.rate_pct / (100.0 * n)).powf(n * years);
    Ok(CompoundInterestResult {
        principal: input.principal,
        rate_pct: input.rate_pct,
        compounds_per_year: n,
        years,
        amount,
        interest: amount - input.principal,
    })
}

impl CompoundInterestResult {
    /// Labeled fields in export order
    pub fn report(&self) -> CalculationReport {
        let mut report = CalculationReport::new();
        report.push("Type", Field::Text("Compound Interest".to_string()));
        report.push("Principal", Field::Number(self.principal));
        report.push("Rate", Field::Number(self.rate_pct));
        report.push("Compounds/Yr", Field::Number(self.compounds_per_year));
        report.push("Years", Field::Fixed(self.years));
        report.push("Total Amount", Field::Number(self.amount));
        report.push("Total Interest", Field::Number(self.interest));
        report
    }
}
