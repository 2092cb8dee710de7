//! Chase credit card activity export.
//!
//!   Transaction Date,Post Date,Description,Category,Type,Amount,Memo
//!   01/15/2024,01/16/2024,STARBUCKS STORE 1234,Food & Drink,Sale,-5.45,
//!
//! Charges are negative, payments and refunds positive.

use crate::formats::{AmountColumns, ColumnMap};

pub const COLUMNS: ColumnMap = ColumnMap {
    has_header: true,
    min_columns: 6,
    exact_columns: false,
    date: 0,
    amount: AmountColumns::Signed(5),
    description: 2,
};
