//! Append-only income/expense ledger with derived totals
//!
//! Entries live for the session only; there is no persistence and no
//! remove/edit operation. Totals are always recomputed by folding the entry
//! sequence, so there is no cached running balance to drift out of sync.

use serde::{Deserialize, Serialize};

use crate::error::FinanceError;

/// Whether an entry adds to income or to expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        }
    }
}

/// A single labeled transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub kind: EntryKind,
    pub description: String,
    pub amount: f64,
}

/// Aggregate totals derived from the entry sequence
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    /// `income - expenses`
    pub net: f64,
}

/// Ordered, append-only list of transactions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry and return the updated totals.
    ///
    /// Rejects blank descriptions and non-finite amounts; the entry count is
    /// bounded only by memory.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        description: &str,
        amount: f64,
    ) -> Result<Totals, FinanceError> {
        if description.trim().is_empty() {
            return Err(FinanceError::Validation(
                "description must not be empty".to_string(),
            ));
        }
        if !amount.is_finite() {
            return Err(FinanceError::Validation(format!(
                "amount must be a finite number, got {amount}"
            )));
        }

        self.entries.push(LedgerEntry {
            kind,
            description: description.to_string(),
            amount,
        });
        Ok(self.totals())
    }

    /// Fold the entry sequence into aggregate totals
    pub fn totals(&self) -> Totals {
        let income: f64 = self
            .entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Income)
            .map(|entry| entry.amount)
            .sum();
        let expenses: f64 = self
            .entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Expense)
            .map(|entry| entry.amount)
            .sum();

        Totals {
            income,
            expenses,
            net: income - expenses,
        }
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
