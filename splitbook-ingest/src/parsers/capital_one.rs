//! Capital One card export with split debit/credit columns.
//!
//!   Transaction Date,Posted Date,Card No.,Description,Category,Debit,Credit
//!   01/15/2024,01/16/2024,1234,H-E-B #455,Groceries,12.00,
//!
//! Both columns hold unsigned values; one of them is filled per row.

use crate::formats::{AmountColumns, ColumnMap};

pub const COLUMNS: ColumnMap = ColumnMap {
    has_header: true,
    min_columns: 7,
    exact_columns: false,
    date: 0,
    amount: AmountColumns::DebitCredit { debit: 5, credit: 6 },
    description: 3,
};
