//! splitbook-core: expense types shared by the importer and its consumers

pub mod batch;
pub mod expense;

pub use batch::{DEFAULT_MAX_BATCH, ImportBatch};
pub use expense::{
    ExpenseDocument, ExpenseFormValues, PaidFor, RecurrenceRule, SplitMode, UNCATEGORIZED,
};
