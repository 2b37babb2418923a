//! The four calculators and their shared report type

pub mod compound;
pub mod loan;
pub mod report;
pub mod simple;
pub mod value;

pub use compound::{
    compound_interest, CompoundInterestInput, CompoundInterestResult, DEFAULT_COMPOUNDS_PER_YEAR,
};
pub use loan::{amortize, AmortizationRow, LoanInput, LoanResult, LoanSummary};
pub use report::{CalculationReport, Field};
pub use simple::{simple_interest, SimpleInterestInput, SimpleInterestResult};
pub use value::{time_value, ValueInput, ValueMode, ValueResult};
