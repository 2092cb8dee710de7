//! The closed set of supported bank export layouts and their column maps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::parsers::{bank_of_america, capital_one, chase, wells_fargo};

/// A known bank CSV export layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementFormat {
    #[serde(rename = "wells-fargo")]
    WellsFargo,
    #[serde(rename = "chase")]
    Chase,
    #[serde(rename = "bank-of-america")]
    BankOfAmerica,
    #[serde(rename = "capital-one")]
    CapitalOne,
}

impl StatementFormat {
    pub const ALL: [StatementFormat; 4] = [
        StatementFormat::WellsFargo,
        StatementFormat::Chase,
        StatementFormat::BankOfAmerica,
        StatementFormat::CapitalOne,
    ];

    /// Stable identifier used on the wire and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            StatementFormat::WellsFargo => "wells-fargo",
            StatementFormat::Chase => "chase",
            StatementFormat::BankOfAmerica => "bank-of-america",
            StatementFormat::CapitalOne => "capital-one",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatementFormat::WellsFargo => "Wells Fargo (headerless)",
            StatementFormat::Chase => "Chase credit card",
            StatementFormat::BankOfAmerica => "Bank of America checking",
            StatementFormat::CapitalOne => "Capital One",
        }
    }

    pub fn columns(&self) -> &'static ColumnMap {
        match self {
            StatementFormat::WellsFargo => &wells_fargo::COLUMNS,
            StatementFormat::Chase => &chase::COLUMNS,
            StatementFormat::BankOfAmerica => &bank_of_america::COLUMNS,
            StatementFormat::CapitalOne => &capital_one::COLUMNS,
        }
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a format key is not one of [`StatementFormat::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format \"{0}\" (expected one of: {keys})", keys = known_keys())]
pub struct UnknownFormatKey(pub String);

fn known_keys() -> String {
    StatementFormat::ALL
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for StatementFormat {
    type Err = UnknownFormatKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StatementFormat::ALL
            .into_iter()
            .find(|f| f.key() == wanted)
            .ok_or_else(|| UnknownFormatKey(s.to_string()))
    }
}

/// Where the signed amount of a row comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountColumns {
    /// One column whose literal sign is the signed amount (negative = charge)
    Signed(usize),
    /// Separate debit and credit columns; debit wins when both are filled
    DebitCredit { debit: usize, credit: usize },
}

/// Column positions and shape of one export layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// First line is a header and is not a transaction
    pub has_header: bool,
    pub min_columns: usize,
    /// Rows must have exactly `min_columns` fields
    pub exact_columns: bool,
    pub date: usize,
    pub amount: AmountColumns,
    pub description: usize,
}

impl ColumnMap {
    /// Index of the first line holding a transaction
    pub fn first_data_row(&self) -> usize {
        usize::from(self.has_header)
    }

    /// Whether a row with `found` fields has the expected shape
    pub fn accepts_field_count(&self, found: usize) -> bool {
        if self.exact_columns {
            found == self.min_columns
        } else {
            found >= self.min_columns
        }
    }
}
