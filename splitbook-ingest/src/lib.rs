//! splitbook-ingest: bank statement export detection and parsing.
//!
//! [`parse_statement`] is the entry point: it picks the layout (or takes an
//! explicit one), parses every data row, and either returns all transactions
//! or the first row-level diagnostic.

pub mod detect;
pub mod error;
pub mod expense;
pub mod formats;
pub mod normalize;
pub mod parsers;
pub mod splitter;
pub mod types;

pub use detect::detect_format;
pub use error::ImportError;
pub use expense::to_expense_form;
pub use formats::{StatementFormat, UnknownFormatKey};
pub use types::{ParseOutcome, ParsedStatement, Transaction};

use splitter::{non_blank_lines, strip_bom};

/// Parse a statement export.
///
/// With `format` set, detection is skipped and that layout is used as-is.
pub fn parse_statement(
    text: &str,
    format: Option<StatementFormat>,
) -> Result<ParsedStatement, ImportError> {
    let lines: Vec<&str> = non_blank_lines(strip_bom(text)).collect();
    if lines.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let format = match format {
        Some(format) => format,
        None => detect::detect_first_line(lines[0]).ok_or(ImportError::UnknownFormat)?,
    };
    tracing::debug!(%format, lines = lines.len(), "parsing statement");

    let transactions = parsers::parse_rows(format, &lines)?;
    if transactions.is_empty() {
        return Err(ImportError::NoTransactions);
    }

    tracing::debug!(%format, transactions = transactions.len(), "parsed statement");
    Ok(ParsedStatement {
        format,
        transactions,
    })
}

/// [`parse_statement`] wrapped in the serializable outcome type.
pub fn parse(text: &str, format: Option<StatementFormat>) -> ParseOutcome {
    parse_statement(text, format).into()
}
