//! Expense form types: the shape the expense-creation layer accepts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category id meaning "uncategorized"
pub const UNCATEGORIZED: i32 = 0;

/// How the amount of an expense is divided between participants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SplitMode {
    #[serde(rename = "EVENLY")]
    Evenly,
    #[serde(rename = "BY_SHARES")]
    ByShares,
    #[serde(rename = "BY_PERCENTAGE")]
    ByPercentage,
    #[serde(rename = "BY_AMOUNT")]
    ByAmount,
}

/// Repetition schedule for an expense
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RecurrenceRule {
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "DAILY")]
    Daily,
    #[serde(rename = "WEEKLY")]
    Weekly,
    #[serde(rename = "MONTHLY")]
    Monthly,
}

/// One participant's share of an expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaidFor {
    pub participant: String,
    pub shares: i64,
}

/// A receipt or other file attached to an expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseDocument {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Input for creating one expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFormValues {
    pub expense_date: NaiveDate,
    pub title: String,
    /// Category id; [`UNCATEGORIZED`] when unknown
    pub category: i32,
    /// Amount in minor units (cents)
    pub amount: i64,
    /// Participant id of the payer
    pub paid_by: String,
    pub paid_for: Vec<PaidFor>,
    pub split_mode: SplitMode,
    pub is_reimbursement: bool,
    pub documents: Vec<ExpenseDocument>,
    pub notes: Option<String>,
    pub recurrence_rule: RecurrenceRule,
}

impl ExpenseFormValues {
    /// An uncategorized expense split evenly, one share per participant.
    pub fn even_split(
        expense_date: NaiveDate,
        title: impl Into<String>,
        amount: i64,
        paid_by: impl Into<String>,
        participants: &[String],
    ) -> Self {
        Self {
            expense_date,
            title: title.into(),
            category: UNCATEGORIZED,
            amount,
            paid_by: paid_by.into(),
            paid_for: participants
                .iter()
                .map(|p| PaidFor {
                    participant: p.clone(),
                    shares: 1,
                })
                .collect(),
            split_mode: SplitMode::Evenly,
            is_reimbursement: false,
            documents: Vec::new(),
            notes: None,
            recurrence_rule: RecurrenceRule::None,
        }
    }

    /// Total shares across all participants
    pub fn total_shares(&self) -> i64 {
        self.paid_for.iter().map(|p| p.shares).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let form = ExpenseFormValues::even_split(
            date,
            "Coffee Shop",
            4250,
            "alice",
            &["alice".to_string(), "bob".to_string()],
        );
        assert_eq!(form.category, UNCATEGORIZED);
        assert_eq!(form.split_mode, SplitMode::Evenly);
        assert_eq!(form.total_shares(), 2);
        assert!(!form.is_reimbursement);
        assert!(form.documents.is_empty());
        assert_eq!(form.notes, None);
        assert_eq!(form.recurrence_rule, RecurrenceRule::None);
    }

    #[test]
    fn test_serializes_camel_case() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let form = ExpenseFormValues::even_split(date, "Rent", 120000, "p1", &["p1".to_string()]);
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["expenseDate"], "2024-03-02");
        assert_eq!(json["paidBy"], "p1");
        assert_eq!(json["splitMode"], "EVENLY");
        assert_eq!(json["recurrenceRule"], "NONE");
        assert_eq!(json["isReimbursement"], false);
        assert_eq!(json["paidFor"][0]["shares"], 1);
        assert!(json["notes"].is_null());
    }
}
