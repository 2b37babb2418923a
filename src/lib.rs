//! Finance Suite - financial calculators and a budget ledger with CSV export
//!
//! This library provides:
//! - Simple and compound interest calculators
//! - Future/present value of a single amount
//! - Loan payments with full amortization schedules
//! - An append-only income/expense ledger with derived totals
//! - CSV export in the three shapes downstream consumers expect

pub mod calculators;
pub mod duration;
pub mod error;
pub mod export;
pub mod ledger;

// Re-export commonly used types
pub use calculators::{
    amortize, compound_interest, simple_interest, time_value, AmortizationRow, CalculationReport,
    CompoundInterestInput, CompoundInterestResult, Field, LoanInput, LoanResult, LoanSummary,
    SimpleInterestInput, SimpleInterestResult, ValueInput, ValueMode, ValueResult,
    DEFAULT_COMPOUNDS_PER_YEAR,
};
pub use duration::Duration;
pub use error::FinanceError;
pub use ledger::{EntryKind, Ledger, LedgerEntry, Totals};
