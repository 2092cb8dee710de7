//! Row parsing driven by each layout's [`ColumnMap`].
//!
//! The first defective row aborts the whole parse; no partial results.

pub mod bank_of_america;
pub mod capital_one;
pub mod chase;
pub mod wells_fargo;

use rust_decimal::Decimal;

use crate::error::ImportError;
use crate::formats::{AmountColumns, ColumnMap, StatementFormat};
use crate::normalize::{build_transaction, parse_amount, parse_date};
use crate::splitter::split_line;
use crate::types::Transaction;

/// Parse every data row of `lines` (non-blank, not yet field-split).
///
/// The header row is skipped for layouts that have one.
pub fn parse_rows(format: StatementFormat, lines: &[&str]) -> Result<Vec<Transaction>, ImportError> {
    let columns = format.columns();
    lines
        .iter()
        .enumerate()
        .skip(columns.first_data_row())
        .map(|(index, line)| {
            parse_row(columns, index + 1, line).inspect_err(|err| {
                tracing::debug!(%format, row = index + 1, error = %err, "rejected row");
            })
        })
        .collect()
}

/// Parse one line; `row` is its 1-indexed position for diagnostics.
pub fn parse_row(columns: &ColumnMap, row: usize, line: &str) -> Result<Transaction, ImportError> {
    let fields = split_line(line);
    if !columns.accepts_field_count(fields.len()) {
        return Err(ImportError::ColumnCount {
            row,
            expected: columns.min_columns,
            found: fields.len(),
            exact: columns.exact_columns,
        });
    }

    let date_text = field(&fields, columns.date);
    let date = parse_date(date_text).ok_or_else(|| ImportError::InvalidDate {
        row,
        value: date_text.to_string(),
    })?;

    let amount = signed_amount(columns.amount, &fields, row)?;

    build_transaction(date, amount, field(&fields, columns.description)).ok_or_else(|| {
        ImportError::InvalidAmount {
            row,
            value: amount_text(columns.amount, &fields).to_string(),
        }
    })
}

/// The cell the signed amount was read from, as written in the file.
fn amount_text(amount: AmountColumns, fields: &[String]) -> &str {
    match amount {
        AmountColumns::Signed(index) => field(fields, index),
        AmountColumns::DebitCredit { debit, credit } => {
            let debit = field(fields, debit);
            if debit.is_empty() { field(fields, credit) } else { debit }
        }
    }
}

fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or("")
}

/// A filled cell parsed as a decimal; `None` for an empty cell.
fn optional_amount(fields: &[String], index: usize, row: usize) -> Result<Option<Decimal>, ImportError> {
    let text = field(fields, index);
    if text.is_empty() {
        return Ok(None);
    }
    parse_amount(text)
        .map(Some)
        .ok_or_else(|| ImportError::InvalidAmount {
            row,
            value: text.to_string(),
        })
}

/// Signed amount with negative = money out.
fn signed_amount(amount: AmountColumns, fields: &[String], row: usize) -> Result<Decimal, ImportError> {
    match amount {
        AmountColumns::Signed(index) => {
            optional_amount(fields, index, row)?.ok_or_else(|| ImportError::InvalidAmount {
                row,
                value: String::new(),
            })
        }
        AmountColumns::DebitCredit { debit, credit } => {
            let debit = optional_amount(fields, debit, row)?;
            let credit = optional_amount(fields, credit, row)?;
            match (debit, credit) {
                (Some(debit), _) => Ok(-debit.abs()),
                (None, Some(credit)) => Ok(credit.abs()),
                (None, None) => Err(ImportError::MissingAmount { row }),
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn lines(text: &str) -> Vec<&str> {
    crate::splitter::non_blank_lines(text).collect()
}
