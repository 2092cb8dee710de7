use thiserror::Error;

/// Why a statement could not be imported.
///
/// `row` is the 1-indexed position of the line among the non-blank lines of
/// the input, so a header line counts as row 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("The file is empty")]
    EmptyInput,

    #[error("Could not detect the bank format. Please choose the format manually.")]
    UnknownFormat,

    #[error("No valid transactions found in the file")]
    NoTransactions,

    #[error(
        "Row {row}: expected {qualifier}{expected} columns, found {found}",
        qualifier = column_qualifier(.exact)
    )]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
        exact: bool,
    },

    #[error("Row {row}: invalid date \"{value}\"")]
    InvalidDate { row: usize, value: String },

    #[error("Row {row}: invalid amount \"{value}\"")]
    InvalidAmount { row: usize, value: String },

    #[error("Row {row}: missing debit or credit amount")]
    MissingAmount { row: usize },
}

fn column_qualifier(exact: &bool) -> &'static str {
    if *exact { "" } else { "at least " }
}

impl ImportError {
    /// Source row for row-local errors
    pub fn row(&self) -> Option<usize> {
        match self {
            ImportError::ColumnCount { row, .. }
            | ImportError::InvalidDate { row, .. }
            | ImportError::InvalidAmount { row, .. }
            | ImportError::MissingAmount { row } => Some(*row),
            ImportError::EmptyInput | ImportError::UnknownFormat | ImportError::NoTransactions => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_messages() {
        let at_least = ImportError::ColumnCount {
            row: 3,
            expected: 6,
            found: 4,
            exact: false,
        };
        assert_eq!(at_least.to_string(), "Row 3: expected at least 6 columns, found 4");

        let exact = ImportError::ColumnCount {
            row: 2,
            expected: 5,
            found: 7,
            exact: true,
        };
        assert_eq!(exact.to_string(), "Row 2: expected 5 columns, found 7");
    }

    #[test]
    fn test_row_only_for_row_errors() {
        assert_eq!(ImportError::EmptyInput.row(), None);
        assert_eq!(ImportError::NoTransactions.row(), None);
        assert_eq!(ImportError::MissingAmount { row: 4 }.row(), Some(4));
        let bad_date = ImportError::InvalidDate {
            row: 2,
            value: "2024-01-15".to_string(),
        };
        assert_eq!(bad_date.row(), Some(2));
        assert_eq!(bad_date.to_string(), "Row 2: invalid date \"2024-01-15\"");
    }
}
