//! CSV serialization for calculation reports, loan schedules, and ledgers
//!
//! Three fixed shapes, kept byte-compatible with the consumers that read
//! these files:
//! - parameter export: `Parameter,Value` rows closed by a calculation date
//! - loan export: summary block, blank row, then the amortization schedule
//! - ledger export: entry rows, blank row, then a totals summary block
//!
//! Each shape has a writer-generic function plus a path wrapper that creates
//! the file. A failed write surfaces as an error; the in-memory result stays
//! valid and re-exportable.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use log::debug;

use crate::calculators::{CalculationReport, LoanResult};
use crate::error::FinanceError;
use crate::ledger::Ledger;

/// Default export filenames, one per shape
pub const DEFAULT_RESULT_FILE: &str = "result.csv";
pub const DEFAULT_SIMPLE_INTEREST_FILE: &str = "simple_interest.csv";
pub const DEFAULT_COMPOUND_INTEREST_FILE: &str = "compound_interest.csv";
pub const DEFAULT_VALUE_FILE: &str = "fv_pv_result.csv";
pub const DEFAULT_LOAN_FILE: &str = "loan_schedule.csv";
pub const DEFAULT_LEDGER_FILE: &str = "budget.csv";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write a `Parameter,Value` report, closed by the calculation date
pub fn write_report_csv<W: Write>(
    report: &CalculationReport,
    writer: W,
) -> Result<(), FinanceError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Parameter", "Value"])?;
    for (label, value) in report.fields() {
        csv_writer.write_record([label.as_str(), value.to_string().as_str()])?;
    }
    let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    csv_writer.write_record(["Date Calculated", stamp.as_str()])?;
    csv_writer.flush()?;
    Ok(())
}

/// Write a loan summary block followed by the full amortization schedule
pub fn write_loan_csv<W: Write>(result: &LoanResult, mut writer: W) -> Result<(), FinanceError> {
    // Marker rows make the record lengths uneven within each block
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(&mut writer);
    csv_writer.write_record(["--- LOAN SUMMARY ---"])?;
    for (label, value) in result.summary.report().fields() {
        csv_writer.write_record([label.as_str(), value.to_string().as_str()])?;
    }
    csv_writer.flush()?;
    drop(csv_writer);

    // A record with one empty field would serialize as `""`; the separator
    // between the blocks must be a truly blank line
    writeln!(writer)?;

    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(&mut writer);
    csv_writer.write_record(["--- AMORTIZATION SCHEDULE ---"])?;
    csv_writer.write_record([
        "Month",
        "Start Balance",
        "Payment",
        "Principal",
        "Interest",
        "End Balance",
    ])?;
    for row in &result.schedule {
        csv_writer.write_record([
            row.month.to_string(),
            format!("{:.2}", row.start_balance),
            format!("{:.2}", row.payment),
            format!("{:.2}", row.principal),
            format!("{:.2}", row.interest),
            format!("{:.2}", row.end_balance),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write ledger entries followed by the totals summary block.
///
/// An empty ledger has nothing to export and is rejected.
pub fn write_ledger_csv<W: Write>(ledger: &Ledger, mut writer: W) -> Result<(), FinanceError> {
    if ledger.is_empty() {
        return Err(FinanceError::Validation(
            "no entries to export".to_string(),
        ));
    }

    let mut csv_writer = csv::Writer::from_writer(&mut writer);
    csv_writer.write_record(["Type", "Description", "Amount"])?;
    for entry in ledger.entries() {
        csv_writer.write_record([
            entry.kind.as_str(),
            entry.description.as_str(),
            entry.amount.to_string().as_str(),
        ])?;
    }
    csv_writer.flush()?;
    drop(csv_writer);

    writeln!(writer)?;

    let totals = ledger.totals();
    let mut csv_writer = csv::Writer::from_writer(&mut writer);
    csv_writer.write_record(["SUMMARY", "", ""])?;
    csv_writer.write_record(["Total Income", "", totals.income.to_string().as_str()])?;
    csv_writer.write_record(["Total Expenses", "", totals.expenses.to_string().as_str()])?;
    csv_writer.write_record(["Net Balance", "", totals.net.to_string().as_str()])?;
    csv_writer.flush()?;
    Ok(())
}

/// Export a report to a file at `path`
pub fn export_report<P: AsRef<Path>>(
    report: &CalculationReport,
    path: P,
) -> Result<(), FinanceError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_report_csv(report, file)?;
    debug!("report exported to {}", path.display());
    Ok(())
}

/// Export a loan result to a file at `path`
pub fn export_loan<P: AsRef<Path>>(result: &LoanResult, path: P) -> Result<(), FinanceError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_loan_csv(result, file)?;
    debug!(
        "loan schedule ({} rows) exported to {}",
        result.schedule.len(),
        path.display()
    );
    Ok(())
}

/// Export a ledger snapshot to a file at `path`
pub fn export_ledger<P: AsRef<Path>>(ledger: &Ledger, path: P) -> Result<(), FinanceError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_ledger_csv(ledger, file)?;
    debug!(
        "ledger ({} entries) exported to {}",
        ledger.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::{amortize, simple_interest, LoanInput, SimpleInterestInput};
    use crate::duration::Duration;
    use crate::ledger::EntryKind;

    fn lines(buffer: &[u8]) -> Vec<String> {
        String::from_utf8(buffer.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_report_shape() {
        let result = simple_interest(&SimpleInterestInput {
            principal: 1000.0,
            rate_pct: 5.0,
            duration: Duration::new(1.0, 0.0, 0.0),
        });

        let mut buffer = Vec::new();
        write_report_csv(&result.report(), &mut buffer).unwrap();
        let lines = lines(&buffer);

        assert_eq!(lines[0], "Parameter,Value");
        assert_eq!(lines[1], "Type,Simple Interest");
        assert_eq!(lines[2], "Principal,1000");
        assert_eq!(lines[3], "Rate (%),5");
        assert_eq!(lines[4], "Time (Years),1.00");
        assert_eq!(lines[5], "Interest Earned,50");
        assert_eq!(lines[6], "Total Amount,1050");
        assert!(lines[7].starts_with("Date Calculated,"));
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_loan_shape() {
        let result = amortize(&LoanInput {
            principal: 1200.0,
            rate_pct: 12.0,
            duration: Duration::new(1.0, 0.0, 0.0),
        })
        .unwrap();

        let mut buffer = Vec::new();
        write_loan_csv(&result, &mut buffer).unwrap();
        let lines = lines(&buffer);

        assert_eq!(lines[0], "--- LOAN SUMMARY ---");
        assert_eq!(lines[1], "Loan Amount,1200");
        assert_eq!(lines[2], "Rate,12%");
        assert_eq!(lines[3], "Months,12");
        assert_eq!(lines[4], "PMT,106.62");
        assert_eq!(lines[5], "Total Interest,79.42");
        assert_eq!(lines[6], "Total Cost,1279.42");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "--- AMORTIZATION SCHEDULE ---");
        assert_eq!(
            lines[9],
            "Month,Start Balance,Payment,Principal,Interest,End Balance"
        );
        assert_eq!(lines[10], "1,1200.00,106.62,94.62,12.00,1105.38");
        assert_eq!(lines.len(), 10 + 12);
        assert!(lines.last().unwrap().starts_with("12,"));
        assert!(lines.last().unwrap().ends_with(",0.00"));
    }

    #[test]
    fn test_ledger_shape() {
        let mut ledger = Ledger::new();
        ledger.add_entry(EntryKind::Income, "Salary", 2000.0).unwrap();
        ledger.add_entry(EntryKind::Expense, "Rent", 800.0).unwrap();

        let mut buffer = Vec::new();
        write_ledger_csv(&ledger, &mut buffer).unwrap();

        let expected = "Type,Description,Amount\n\
                        Income,Salary,2000\n\
                        Expense,Rent,800\n\
                        \n\
                        SUMMARY,,\n\
                        Total Income,,2000\n\
                        Total Expenses,,800\n\
                        Net Balance,,1200\n";
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }

    #[test]
    fn test_ledger_description_with_comma_is_quoted() {
        let mut ledger = Ledger::new();
        ledger
            .add_entry(EntryKind::Expense, "Rent, utilities", 900.0)
            .unwrap();

        let mut buffer = Vec::new();
        write_ledger_csv(&ledger, &mut buffer).unwrap();
        let lines = lines(&buffer);

        assert_eq!(lines[1], "Expense,\"Rent, utilities\",900");
    }

    #[test]
    fn test_empty_ledger_export_rejected() {
        let ledger = Ledger::new();
        let err = write_ledger_csv(&ledger, Vec::new()).unwrap_err();
        assert!(matches!(err, FinanceError::Validation(_)));
    }

    #[test]
    fn test_export_to_path_round_trip() {
        let mut ledger = Ledger::new();
        ledger.add_entry(EntryKind::Income, "Salary", 2000.0).unwrap();

        let path = std::env::temp_dir().join("finance_suite_export_ledger_test.csv");
        export_ledger(&ledger, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Type,Description,Amount\n"));
        assert!(contents.contains("Net Balance,,2000"));
        std::fs::remove_file(&path).unwrap();
    }
}
