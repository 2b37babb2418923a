//! Future and present value of a single amount
//!
//! The exponent uses fractional years directly, not integer compounding
//! periods. This is the simplified model the suite has always exposed;
//! callers relying on its output depend on the exact `(1 + R/100)^T` form.

use serde::{Deserialize, Serialize};

use super::report::{CalculationReport, Field};
use crate::duration::Duration;

/// Direction of the time-value calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueMode {
    /// Grow an amount forward in time
    Future,
    /// Discount an amount back to today
    Present,
}

impl ValueMode {
    /// Export label, e.g. "FV Calculation"
    pub fn type_label(&self) -> &'static str {
        match self {
            ValueMode::Future => "FV Calculation",
            ValueMode::Present => "PV Calculation",
        }
    }

    /// Display label for the computed amount
    pub fn result_label(&self) -> &'static str {
        match self {
            ValueMode::Future => "Future Value",
            ValueMode::Present => "Present Value",
        }
    }
}

/// Inputs for a future/present value calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValueInput {
    pub mode: ValueMode,
    /// Amount to grow or discount
    pub amount: f64,
    /// Annual rate in percent
    pub rate_pct: f64,
    pub duration: Duration,
}

/// Result of a future/present value calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValueResult {
    pub mode: ValueMode,
    pub amount: f64,
    pub rate_pct: f64,
    pub years: f64,
    pub value: f64,
}

/// FV: `amount * (1 + R/100)^T`; PV: `amount / (1 + R/100)^T`
pub fn time_value(input: &ValueInput) -> ValueResult {
    let years = input.duration.total_years();
    let growth = (1.0 + input.rate_pct / 100.0).powf(years);
    let value = match input.mode {
        ValueMode::Future => input.amount * growth,
        ValueMode::Present => input.amount / growth,
    };
    ValueResult {
        mode: input.mode,
        amount: input.amount,
        rate_pct: input.rate_pct,
        years,
        value,
    }
}

impl ValueResult {
    /// Labeled fields in export order
    pub fn report(&self) -> CalculationReport {
        let mut report = CalculationReport::new();
        report.push("Type", Field::Text(self.mode.type_label().to_string()));
        report.push("Input Amount", Field::Number(self.amount));
        report.push("Rate", Field::Number(self.rate_pct));
        report.push("Years", Field::Fixed(self.years));
        report.push("Result", Field::Number(self.value));
        report
    }
}
