//! Bank of America checking export.
//!
//!   Date,Description,Amount,Running Bal.
//!   01/02/2024,"ZELLE PAYMENT TO JOHN",-60.00,"1,240.00"

use crate::formats::{AmountColumns, ColumnMap};

pub const COLUMNS: ColumnMap = ColumnMap {
    has_header: true,
    min_columns: 3,
    exact_columns: false,
    date: 0,
    amount: AmountColumns::Signed(2),
    description: 1,
};
