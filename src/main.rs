//! Finance Suite CLI
//!
//! Command-line front end for the calculators and the budget ledger. Each
//! subcommand mirrors one tab of the original form: parse the raw inputs,
//! run the calculation, print the result, and optionally export CSV or JSON.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use finance_suite::export;
use finance_suite::{
    amortize, compound_interest, simple_interest, time_value, CompoundInterestInput, Duration,
    EntryKind, FinanceError, Ledger, LoanInput, SimpleInterestInput, ValueInput, ValueMode,
    DEFAULT_COMPOUNDS_PER_YEAR,
};

#[derive(Parser)]
#[command(
    name = "finance-suite",
    about = "Financial calculators and a budget ledger with CSV export",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simple interest on a principal
    Simple {
        /// Principal amount
        #[arg(long)]
        principal: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[command(flatten)]
        duration: DurationArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Compound interest with a compounding frequency
    Compound {
        /// Principal amount
        #[arg(long)]
        principal: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        /// Compounding periods per year
        #[arg(long, default_value_t = DEFAULT_COMPOUNDS_PER_YEAR)]
        compounds: f64,
        #[command(flatten)]
        duration: DurationArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Future or present value of an amount
    Value {
        /// Grow forward (fv) or discount back (pv)
        #[arg(long, value_enum)]
        mode: ModeArg,
        /// Amount to grow or discount
        #[arg(long)]
        amount: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[command(flatten)]
        duration: DurationArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Loan payment and amortization schedule
    Loan {
        /// Amount borrowed
        #[arg(long)]
        principal: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[command(flatten)]
        duration: DurationArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Build a budget ledger from income/expense items
    Ledger {
        /// Income item as "<description>=<amount>" (repeatable)
        #[arg(long = "income", value_name = "DESC=AMOUNT")]
        incomes: Vec<String>,
        /// Expense item as "<description>=<amount>" (repeatable)
        #[arg(long = "expense", value_name = "DESC=AMOUNT")]
        expenses: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Fv,
    Pv,
}

impl From<ModeArg> for ValueMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Fv => ValueMode::Future,
            ModeArg::Pv => ValueMode::Present,
        }
    }
}

/// Raw duration fields, passed to the normalizer as text
#[derive(Args)]
struct DurationArgs {
    /// Years component of the duration
    #[arg(long, default_value = "", hide_default_value = true)]
    years: String,
    /// Months component of the duration
    #[arg(long, default_value = "", hide_default_value = true)]
    months: String,
    /// Days component of the duration
    #[arg(long, default_value = "", hide_default_value = true)]
    days: String,
}

impl DurationArgs {
    fn parse(&self) -> Option<Duration> {
        Duration::parse(&self.years, &self.months, &self.days)
    }

    /// No duration collapses to zero time for the calculators where a
    /// zero-time result is still mathematically valid
    fn parse_or_zero(&self) -> Duration {
        self.parse().unwrap_or(Duration::ZERO)
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Write the result as CSV, to PATH or to the shape's default filename
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    export: Option<String>,
    /// Print the structured result as JSON
    #[arg(long)]
    json: bool,
}

impl OutputArgs {
    fn export_path(&self, default_name: &str) -> Option<PathBuf> {
        self.export.as_ref().map(|path| {
            if path.is_empty() {
                PathBuf::from(default_name)
            } else {
                PathBuf::from(path)
            }
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Simple {
            principal,
            rate,
            duration,
            output,
        } => run_simple(principal, rate, &duration, &output),
        Command::Compound {
            principal,
            rate,
            compounds,
            duration,
            output,
        } => run_compound(principal, rate, compounds, &duration, &output),
        Command::Value {
            mode,
            amount,
            rate,
            duration,
            output,
        } => run_value(mode.into(), amount, rate, &duration, &output),
        Command::Loan {
            principal,
            rate,
            duration,
            output,
        } => run_loan(principal, rate, &duration, &output),
        Command::Ledger {
            incomes,
            expenses,
            output,
        } => run_ledger(&incomes, &expenses, &output),
    }
}

fn run_simple(
    principal: f64,
    rate: f64,
    duration: &DurationArgs,
    output: &OutputArgs,
) -> Result<()> {
    let result = simple_interest(&SimpleInterestInput {
        principal,
        rate_pct: rate,
        duration: duration.parse_or_zero(),
    });

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Interest: ${:.2}", result.interest);
        println!("Total:    ${:.2}", result.total);
    }

    if let Some(path) = output.export_path(export::DEFAULT_SIMPLE_INTEREST_FILE) {
        export::export_report(&result.report(), &path)?;
        println!("Data saved to {}", path.display());
    }
    Ok(())
}

fn run_compound(
    principal: f64,
    rate: f64,
    compounds: f64,
    duration: &DurationArgs,
    output: &OutputArgs,
) -> Result<()> {
    let result = compound_interest(&CompoundInterestInput {
        principal,
        rate_pct: rate,
        compounds_per_year: compounds,
        duration: duration.parse_or_zero(),
    })?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Total:    ${:.2}", result.amount);
        println!("Interest: ${:.2}", result.interest);
    }

    if let Some(path) = output.export_path(export::DEFAULT_COMPOUND_INTEREST_FILE) {
        export::export_report(&result.report(), &path)?;
        println!("Data saved to {}", path.display());
    }
    Ok(())
}

fn run_value(
    mode: ValueMode,
    amount: f64,
    rate: f64,
    duration: &DurationArgs,
    output: &OutputArgs,
) -> Result<()> {
    let result = time_value(&ValueInput {
        mode,
        amount,
        rate_pct: rate,
        duration: duration.parse_or_zero(),
    });

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}: ${:.2}", mode.result_label(), result.value);
    }

    if let Some(path) = output.export_path(export::DEFAULT_VALUE_FILE) {
        export::export_report(&result.report(), &path)?;
        println!("Data saved to {}", path.display());
    }
    Ok(())
}

fn run_loan(
    principal: f64,
    rate: f64,
    duration: &DurationArgs,
    output: &OutputArgs,
) -> Result<()> {
    let Some(term) = duration.parse() else {
        bail!("a positive loan term is required (set --years, --months, or --days)");
    };
    let result = amortize(&LoanInput {
        principal,
        rate_pct: rate,
        duration: term,
    })?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let summary = &result.summary;
        println!("Monthly Payment: ${:.2}", summary.payment);
        println!("Total Interest:  ${:.2}", summary.total_interest);
        println!("Total Cost:      ${:.2}", summary.total_cost);
        println!();
        println!(
            "{:>5} {:>14} {:>10} {:>10} {:>10} {:>14}",
            "Month", "Start Balance", "Payment", "Principal", "Interest", "End Balance"
        );
        for row in result.schedule.iter().take(12) {
            println!(
                "{:>5} {:>14.2} {:>10.2} {:>10.2} {:>10.2} {:>14.2}",
                row.month, row.start_balance, row.payment, row.principal, row.interest,
                row.end_balance
            );
        }
        if result.schedule.len() > 12 {
            println!("... ({} more months)", result.schedule.len() - 12);
        }
    }

    if let Some(path) = output.export_path(export::DEFAULT_LOAN_FILE) {
        export::export_loan(&result, &path)?;
        println!("Schedule saved to {}", path.display());
    }
    Ok(())
}

fn run_ledger(incomes: &[String], expenses: &[String], output: &OutputArgs) -> Result<()> {
    let mut ledger = Ledger::new();
    for spec in incomes {
        let (description, amount) = parse_item(spec)?;
        ledger.add_entry(EntryKind::Income, &description, amount)?;
    }
    for spec in expenses {
        let (description, amount) = parse_item(spec)?;
        ledger.add_entry(EntryKind::Expense, &description, amount)?;
    }

    let totals = ledger.totals();
    if output.json {
        let view = serde_json::json!({
            "entries": ledger.entries(),
            "totals": totals,
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        for entry in ledger.entries() {
            println!(
                "{:<8} {:<24} ${:.2}",
                entry.kind.as_str(),
                entry.description,
                entry.amount
            );
        }
        println!("Income: ${:.2}", totals.income);
        println!("Expenses: ${:.2}", totals.expenses);
        println!("Net Balance: ${:.2}", totals.net);
    }

    if let Some(path) = output.export_path(export::DEFAULT_LEDGER_FILE) {
        export::export_ledger(&ledger, &path)?;
        println!("Budget saved to {}", path.display());
    }
    Ok(())
}

/// Split an "<description>=<amount>" item spec
fn parse_item(spec: &str) -> Result<(String, f64)> {
    let (description, amount) = spec
        .rsplit_once('=')
        .with_context(|| format!("expected \"<description>=<amount>\", got {spec:?}"))?;
    let amount = amount
        .trim()
        .parse::<f64>()
        .map_err(|_| FinanceError::Parse {
            field: "amount",
            value: amount.to_string(),
        })?;
    Ok((description.to_string(), amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let (description, amount) = parse_item("Salary=2000").unwrap();
        assert_eq!(description, "Salary");
        assert!((amount - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_item_keeps_equals_in_description() {
        let (description, amount) = parse_item("a=b=3.5").unwrap();
        assert_eq!(description, "a=b");
        assert!((amount - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_item_rejects_bad_amount() {
        assert!(parse_item("Salary=lots").is_err());
        assert!(parse_item("Salary").is_err());
    }
}
