//! Error taxonomy shared by the calculators, ledger, and exporter
//!
//! All variants are non-fatal: a parse failure means no result was produced,
//! a validation failure rejects the inputs before any arithmetic runs, and
//! an export failure leaves the calculation result intact and re-exportable.

use thiserror::Error;

/// Failures surfaced across the calculator, ledger, and export boundaries
#[derive(Debug, Error)]
pub enum FinanceError {
    /// A raw text field could not be parsed as a number
    #[error("invalid numeric input for {field}: {value:?}")]
    Parse {
        field: &'static str,
        value: String,
    },

    /// A structurally invalid value, rejected before computation
    #[error("{0}")]
    Validation(String),

    /// The underlying file write failed
    #[error("could not save file: {0}")]
    Export(#[from] std::io::Error),

    /// CSV serialization failed mid-write
    #[error("could not write CSV record: {0}")]
    Csv(#[from] csv::Error),
}

impl FinanceError {
    /// True for input-side failures (parse/validation), false for I/O
    pub fn is_input_error(&self) -> bool {
        matches!(self, FinanceError::Parse { .. } | FinanceError::Validation(_))
    }
}
