//! Hand-off from parsed transactions to expense creation.

use splitbook_core::ExpenseFormValues;

use crate::types::Transaction;

/// Expense form for one transaction, split evenly across `participants`.
///
/// The ids are passed through unchecked; the expense layer validates them.
pub fn to_expense_form(
    txn: &Transaction,
    paid_by: &str,
    participants: &[String],
) -> ExpenseFormValues {
    ExpenseFormValues::even_split(
        txn.date,
        txn.description.clone(),
        txn.amount_minor_units,
        paid_by,
        participants,
    )
}
