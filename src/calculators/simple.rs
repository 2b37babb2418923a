//! Simple (non-compounding) interest

use serde::{Deserialize, Serialize};

use super::report::{CalculationReport, Field};
use crate::duration::Duration;

/// Inputs for a simple interest calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    /// Principal amount
    pub principal: f64,
    /// Annual rate in percent
    pub rate_pct: f64,
    /// Investment duration
    pub duration: Duration,
}

/// Result of a simple interest calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub principal: f64,
    pub rate_pct: f64,
    pub years: f64,
    pub interest: f64,
    pub total: f64,
}

/// `interest = P * (R/100) * T`, `total = P + interest`
///
/// A zero duration is mathematically valid here and yields zero interest.
pub fn simple_interest(input: &SimpleInterestInput) -> SimpleInterestResult {
    let years = input.duration.total_years();
    let interest = input.principal * (input.rate_pct / 100.0) * years;
    SimpleInterestResult {
        principal: input.principal,
        rate_pct: input.rate_pct,
        years,
        interest,
        total: input.principal + interest,
    }
}

impl SimpleInterestResult {
    /// Labeled fields in export order
    pub fn report(&self) -> CalculationReport {
        let mut report = CalculationReport::new();
        report.push("Type", Field::Text("Simple Interest".to_string()));
        report.push("Principal", Field::Number(self.principal));
        report.push("Rate (%)", Field::Number(self.rate_pct));
        report.push("Time (Years)", Field::Fixed(self.years));
        report.push("Interest Earned", Field::Number(self.interest));
        report.push("Total Amount", Field::Number(self.total));
        report
    }
}
