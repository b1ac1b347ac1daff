//! Totals over a filtered set of transactions.
//!
//! Only successful transactions count towards totals. Rejected ones are left
//! out entirely rather than counted as zero.

use crate::transaction::Transaction;

/// Sums the amounts of successful transactions, in minor units.
///
/// # Returns
/// 0 for an empty slice or when nothing succeeded.
pub fn total_successful(transactions: &[Transaction]) -> i64 {
    successful(transactions)
        .map(|transaction| transaction.amount)
        .sum()
}

/// Sums the deductions of successful transactions, in minor units.
///
/// Transactions without a deduction contribute nothing.
pub fn total_deductions(transactions: &[Transaction]) -> i64 {
    successful(transactions)
        .filter_map(|transaction| transaction.deduction)
        .sum()
}

/// Counts the successful transactions.
pub fn successful_count(transactions: &[Transaction]) -> usize {
    successful(transactions).count()
}

fn successful(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.is_successful())
}
