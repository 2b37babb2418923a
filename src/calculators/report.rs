//! Labeled report fields shared by the calculators
//!
//! A report is the ordered, immutable set of (label, value) pairs a
//! calculation produced, consumed by the exporter and the JSON output. The
//! `Field` variants carry the formatting split the export format requires:
//! `Fixed` renders with two decimals, `Number` keeps raw precision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single report value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Field {
    /// Free text, passed through unchanged
    Text(String),
    /// Numeric value rendered at raw precision
    Number(f64),
    /// Numeric value rendered with fixed two decimals
    Fixed(f64),
    /// Integer count
    Count(u32),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text(text) => write!(f, "{text}"),
            Field::Number(value) => write!(f, "{value}"),
            Field::Fixed(value) => write!(f, "{value:.2}"),
            Field::Count(count) => write!(f, "{count}"),
        }
    }
}

/// Ordered labeled fields produced once per calculation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationReport {
    fields: Vec<(String, Field)>,
}

impl CalculationReport {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a labeled field; insertion order is the export order
    pub fn push(&mut self, label: &str, value: Field) {
        self.fields.push((label.to_string(), value));
    }

    pub fn fields(&self) -> &[(String, Field)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_display_formats() {
        assert_eq!(Field::Text("Simple Interest".to_string()).to_string(), "Simple Interest");
        assert_eq!(Field::Number(1050.5).to_string(), "1050.5");
        assert_eq!(Field::Number(2000.0).to_string(), "2000");
        assert_eq!(Field::Fixed(1.0).to_string(), "1.00");
        assert_eq!(Field::Fixed(106.61855).to_string(), "106.62");
        assert_eq!(Field::Count(12).to_string(), "12");
    }

    #[test]
    fn test_report_preserves_insertion_order() {
        let mut report = CalculationReport::new();
        report.push("Type", Field::Text("Test".to_string()));
        report.push("Principal", Field::Number(1000.0));
        report.push("Months", Field::Count(12));

        let labels: Vec<&str> = report.fields().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["Type", "Principal", "Months"]);
    }
}
