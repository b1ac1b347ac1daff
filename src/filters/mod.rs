//! The filter pipeline: date window, then sales channel, then text search.

mod date;
mod search;
mod transaction_type;

pub use date::{DateWindow, matches_date_filter};
pub use search::{SearchTerm, matches_search};
pub use transaction_type::matches_transaction_type;

use time::OffsetDateTime;

use crate::{filter_state::FilterState, transaction::Transaction, zone::LocalZone};

/// Filter `transactions` by `state` as of `now`.
///
/// The date window is resolved once from `now`. Day boundaries, months and
/// the date/time strings the search matches against are taken in `zone`.
/// The result keeps the input order and never contains anything not in the
/// input.
pub fn apply_filters(
    transactions: &[Transaction],
    state: &FilterState,
    now: OffsetDateTime,
    zone: LocalZone,
) -> Vec<Transaction> {
    let window = DateWindow::new(state.date_filter, now, zone);
    let search_term = SearchTerm::new(&state.search_term);

    let filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| window.contains(transaction.created_at))
        .filter(|transaction| {
            matches_transaction_type(transaction.sales_type, &state.transaction_type_filter)
        })
        .filter(|transaction| {
            search_term
                .as_ref()
                .is_none_or(|term| term.matches(transaction, zone))
        })
        .cloned()
        .collect();

    tracing::debug!(
        "Filtered {} transactions down to {} with {:?}",
        transactions.len(),
        filtered.len(),
        state
    );

    filtered
}
