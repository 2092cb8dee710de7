//! Format detection from the first non-blank line of an export.
//!
//! Only the first line is inspected: descriptions in later rows are free text
//! and may contain another layout's header words.

use crate::error::ImportError;
use crate::formats::StatementFormat;
use crate::splitter::{non_blank_lines, split_line, strip_bom};

type Predicate = fn(&str) -> bool;

/// Checked top to bottom; the first match wins.
const RULES: [(Predicate, StatementFormat); 4] = [
    (is_chase_header, StatementFormat::Chase),
    (is_bank_of_america_header, StatementFormat::BankOfAmerica),
    (is_capital_one_header, StatementFormat::CapitalOne),
    (is_wells_fargo_row, StatementFormat::WellsFargo),
];

const CHASE_KEYWORDS: &[&str] = &["transaction date", "post date", "category", "type"];
const BANK_OF_AMERICA_KEYWORDS: &[&str] = &["date", "description", "running bal"];
const CAPITAL_ONE_KEYWORDS: &[&str] = &["transaction date", "posted date", "debit", "credit"];

const WELLS_FARGO_FIELDS: usize = 5;
const WELLS_FARGO_SENTINEL_COLUMN: usize = 2;
const WELLS_FARGO_SENTINEL: &str = "*";

/// Detect the layout of a whole export from its first non-blank line.
pub fn detect_format(text: &str) -> Option<StatementFormat> {
    let first = non_blank_lines(strip_bom(text)).next()?;
    detect_first_line(first)
}

/// Like [`detect_format`], but tells an empty export from an unknown one.
pub fn detect_statement(text: &str) -> Result<StatementFormat, ImportError> {
    let first = non_blank_lines(strip_bom(text))
        .next()
        .ok_or(ImportError::EmptyInput)?;
    detect_first_line(first).ok_or(ImportError::UnknownFormat)
}

/// Formats in the order detection tries them
pub fn detection_order() -> [StatementFormat; 4] {
    RULES.map(|(_, format)| format)
}

/// Classify a single first line.
pub fn detect_first_line(line: &str) -> Option<StatementFormat> {
    RULES
        .iter()
        .find(|(matches, _)| matches(line))
        .map(|(_, format)| *format)
}

fn contains_all(line: &str, keywords: &[&str]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().all(|k| lower.contains(k))
}

fn is_chase_header(line: &str) -> bool {
    contains_all(line, CHASE_KEYWORDS)
}

fn is_bank_of_america_header(line: &str) -> bool {
    contains_all(line, BANK_OF_AMERICA_KEYWORDS)
}

fn is_capital_one_header(line: &str) -> bool {
    contains_all(line, CAPITAL_ONE_KEYWORDS)
}

fn is_wells_fargo_row(line: &str) -> bool {
    let fields = split_line(line);
    fields.len() == WELLS_FARGO_FIELDS && fields[WELLS_FARGO_SENTINEL_COLUMN] == WELLS_FARGO_SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_header() {
        assert_eq!(
            detect_first_line("Transaction Date,Post Date,Description,Category,Type,Amount,Memo"),
            Some(StatementFormat::Chase)
        );
        assert_eq!(
            detect_first_line("Date,Description,Amount,Running Bal."),
            Some(StatementFormat::BankOfAmerica)
        );
        assert_eq!(
            detect_first_line(
                "Transaction Date,Posted Date,Card No.,Description,Category,Debit,Credit"
            ),
            Some(StatementFormat::CapitalOne)
        );
    }

    #[test]
    fn test_detects_headerless_by_shape() {
        assert_eq!(
            detect_first_line(r#""01/15/2024","-42.50","*","","COFFEE SHOP""#),
            Some(StatementFormat::WellsFargo)
        );
        // Right shape, wrong sentinel
        assert_eq!(detect_first_line("01/15/2024,-42.50,x,,COFFEE SHOP"), None);
        // Sentinel present, wrong field count
        assert_eq!(detect_first_line("01/15/2024,-42.50,*,,COFFEE SHOP,extra"), None);
    }

    #[test]
    fn test_header_case_is_ignored() {
        assert_eq!(
            detect_first_line("DATE,DESCRIPTION,AMOUNT,RUNNING BAL."),
            Some(StatementFormat::BankOfAmerica)
        );
    }

    #[test]
    fn test_priority_when_two_keyword_sets_match() {
        let both = "Transaction Date,Post Date,Description,Category,Type,Amount,Running Bal.";
        for _ in 0..3 {
            assert_eq!(detect_first_line(both), Some(StatementFormat::Chase));
        }
    }

    #[test]
    fn test_only_first_line_counts() {
        let text = "\n\n01/15/2024,-42.50,x,,foo\nDate,Description,Amount,Running Bal.\n";
        assert_eq!(detect_format(text), None);

        let text = "\r\n  \r\nDate,Description,Amount,Running Bal.\r\n";
        assert_eq!(detect_format(text), Some(StatementFormat::BankOfAmerica));

        let text = "\rDate,Description,Amount,Running Bal.\r01/02/2024,x,1.00,2.00";
        assert_eq!(detect_format(text), Some(StatementFormat::BankOfAmerica));
    }

    #[test]
    fn test_detection_order_covers_all_formats() {
        let order = detection_order();
        assert_eq!(order[0], StatementFormat::Chase);
        assert_eq!(order[3], StatementFormat::WellsFargo);
        for format in StatementFormat::ALL {
            assert!(order.contains(&format));
        }
    }

    #[test]
    fn test_detect_statement_errors() {
        assert_eq!(detect_statement(""), Err(ImportError::EmptyInput));
        assert_eq!(detect_statement("\u{feff} \r\n\t\n"), Err(ImportError::EmptyInput));
        assert_eq!(detect_statement("hello,world"), Err(ImportError::UnknownFormat));
        assert_eq!(
            detect_statement("\nDate,Description,Amount,Running Bal.\n"),
            Ok(StatementFormat::BankOfAmerica)
        );
    }

    #[test]
    fn test_nothing_to_detect() {
        assert_eq!(detect_format(""), None);
        assert_eq!(detect_format("hello,world"), None);
    }
}
