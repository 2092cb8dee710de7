//! Wells Fargo account activity export.
//!
//! No header; every field is quoted and the third column is always `*`:
//!   "01/15/2024","-42.50","*","","COFFEE SHOP SEATTLE WA"

use crate::formats::{AmountColumns, ColumnMap};

pub const COLUMNS: ColumnMap = ColumnMap {
    has_header: false,
    min_columns: 5,
    exact_columns: true,
    date: 0,
    amount: AmountColumns::Signed(1),
    description: 4,
};

#[cfg(test)]
mod tests {
    use super::super::{lines, parse_rows};
    use crate::error::ImportError;
    use crate::formats::StatementFormat;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_wells_fargo_basic() {
        let text = r#"
"01/15/2024","-42.50","*","","COFFEE SHOP"
"01/16/2024","1500.00","*","","PAYROLL ACME INC"
"#;

        let txns = parse_rows(StatementFormat::WellsFargo, &lines(text)).unwrap();
        assert_eq!(txns.len(), 2);

        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(txns[0].raw_signed_amount, dec!(-42.50));
        assert_eq!(txns[0].amount_minor_units, 4250);
        assert!(!txns[0].is_credit);
        assert!(txns[0].selected);
        assert_eq!(txns[0].description, "COFFEE SHOP");

        assert!(txns[1].is_credit);
        assert!(!txns[1].selected);
        assert_eq!(txns[1].amount_minor_units, 150000);
    }

    #[test]
    fn test_first_row_is_data() {
        let text = r#""1/2/2024","-1.00","*","","A""#;
        let txns = parse_rows(StatementFormat::WellsFargo, &lines(text)).unwrap();
        assert_eq!(txns.len(), 1);
    }

    #[test]
    fn test_extra_columns_rejected() {
        let text = r#""01/15/2024","-42.50","*","","COFFEE","extra""#;
        let err = parse_rows(StatementFormat::WellsFargo, &lines(text)).unwrap_err();
        assert_eq!(err.to_string(), "Row 1: expected 5 columns, found 6");
    }

    #[test]
    fn test_bad_date_names_row_and_text() {
        let text = r#"
"01/15/2024","-42.50","*","","COFFEE"
"2024-01-16","-1.00","*","","TEA"
"#;
        let err = parse_rows(StatementFormat::WellsFargo, &lines(text)).unwrap_err();
        assert_eq!(
            err,
            ImportError::InvalidDate {
                row: 2,
                value: "2024-01-16".to_string()
            }
        );
    }
}
