//! Batch of expenses headed for a single bulk insert

use anyhow::{Result, bail};

use crate::expense::ExpenseFormValues;

/// Default cap on expenses accepted per batch
pub const DEFAULT_MAX_BATCH: usize = 500;

/// A non-empty list of expense forms no larger than the configured cap
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBatch {
    expenses: Vec<ExpenseFormValues>,
}

impl ImportBatch {
    pub fn new(expenses: Vec<ExpenseFormValues>, max: usize) -> Result<Self> {
        if expenses.is_empty() {
            bail!("no expenses selected for import");
        }
        if expenses.len() > max {
            bail!(
                "too many expenses in one batch: {} (limit {})",
                expenses.len(),
                max
            );
        }
        Ok(Self { expenses })
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of all amounts in minor units
    pub fn total_amount(&self) -> i64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn expenses(&self) -> &[ExpenseFormValues] {
        &self.expenses
    }

    pub fn into_inner(self) -> Vec<ExpenseFormValues> {
        self.expenses
    }
}
