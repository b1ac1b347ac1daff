//! A sales dashboard for payment transactions.
//!
//! The full transaction list is fetched once per session (and again on a
//! manual refetch). Everything else happens in memory over that snapshot:
//! filtering by date window, sales channel and free-text search, totalling
//! successful sales, and looking up a single transaction's details.
//!
//! The filter selection lives in a [FilterStore] that notifies subscribers
//! on every change and, when built with [FilterStore::persisted], restores
//! itself from and saves itself to a SQLite database.

#![warn(missing_docs)]

mod aggregation;
mod config;
mod dashboard;
mod error;
mod filter_state;
mod filter_store;
mod filters;
mod format;
mod labels;
mod logging;
mod persistence;
mod source;
mod transaction;
mod zone;

pub use aggregation::{successful_count, total_deductions, total_successful};
pub use config::Config;
pub use dashboard::{Dashboard, DashboardView, TransactionDetail};
pub use error::Error;
pub use filter_state::{DateFilter, FilterAction, FilterState, TransactionTypeFilter};
pub use filter_store::{FilterStore, SubscriptionId};
pub use filters::{
    DateWindow, SearchTerm, apply_filters, matches_date_filter, matches_search,
    matches_transaction_type,
};
pub use format::{
    format_currency, format_date_only, format_date_short, format_date_time, format_time_12_hour,
    format_time_only,
};
pub use labels::{
    date_filter_caption, franchise_name, last_four_digits, payment_method_name,
    sales_card_title, sales_type_name, status_name, table_title,
    transaction_type_filter_caption, transaction_type_option_label,
};
pub use logging::setup_logging;
pub use persistence::{
    FILTER_STATE_NAMESPACE, FilterStatePersistence, PersistenceError,
    SQLiteFilterStatePersistence, create_filter_state_table, load_filter_state,
    save_filter_state,
};
pub use source::{
    DEFAULT_ENDPOINT, FetchError, HttpTransactionSource, TransactionSource, fetch_with_retry,
};
pub use transaction::{
    CardFranchise, PaymentMethod, SalesType, Transaction, TransactionBuilder, TransactionStatus,
};
pub use zone::LocalZone;
