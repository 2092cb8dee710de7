use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use uuid::Uuid;

use crate::error::ImportError;
use crate::formats::StatementFormat;

/// Normalized output of the statement parsers (bank-agnostic)
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Fresh per parse; only meaningful while the parsed list is alive
    pub id: Uuid,
    pub date: NaiveDate,
    /// `round(|raw_signed_amount| * 100)`
    pub amount_minor_units: i64,
    /// Negative means money left the account; positive means it came in.
    pub raw_signed_amount: Decimal,
    pub is_credit: bool,
    pub description: String,
    /// Charges start selected for import, credits do not.
    pub selected: bool,
}

/// A successfully parsed statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatement {
    pub format: StatementFormat,
    /// In source row order, header excluded
    pub transactions: Vec<Transaction>,
}

impl ParsedStatement {
    /// Transactions currently marked for import
    pub fn selected(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|t| t.selected)
    }

    /// Sum of debit amounts in minor units
    pub fn total_debits(&self) -> i64 {
        self.transactions
            .iter()
            .filter(|t| !t.is_credit)
            .map(|t| t.amount_minor_units)
            .sum()
    }

    /// Sum of credit amounts in minor units
    pub fn total_credits(&self) -> i64 {
        self.transactions
            .iter()
            .filter(|t| t.is_credit)
            .map(|t| t.amount_minor_units)
            .sum()
    }
}

/// Result of an import as handed to callers outside the crate.
///
/// Serializes as `{"success":true,"detectedFormat":..,"transactions":[..]}`
/// or `{"success":false,"error":".."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Success(ParsedStatement),
    Failure { error: String },
}

impl ParseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success(_))
    }
}

impl From<Result<ParsedStatement, ImportError>> for ParseOutcome {
    fn from(result: Result<ParsedStatement, ImportError>) -> Self {
        match result {
            Ok(parsed) => ParseOutcome::Success(parsed),
            Err(err) => ParseOutcome::Failure {
                error: err.to_string(),
            },
        }
    }
}

impl Serialize for ParseOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParseOutcome::Success(parsed) => {
                let mut s = serializer.serialize_struct("ParseOutcome", 3)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("detectedFormat", &parsed.format)?;
                s.serialize_field("transactions", &parsed.transactions)?;
                s.end()
            }
            ParseOutcome::Failure { error } => {
                let mut s = serializer.serialize_struct("ParseOutcome", 2)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("error", error)?;
                s.end()
            }
        }
    }
}
