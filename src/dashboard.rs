//! The dashboard session: the fetched snapshot and everything derived from it.
//!
//! The snapshot is replaced wholesale on every refetch and never changed in
//! place, so any view built from it stays consistent.

use time::OffsetDateTime;

use crate::{
    aggregation::{successful_count, total_deductions, total_successful},
    filter_state::FilterState,
    filters::apply_filters,
    format::{format_currency, format_date_time},
    labels::{
        date_filter_caption, franchise_name, payment_method_name, sales_card_title,
        sales_type_name, status_name, table_title, transaction_type_filter_caption,
    },
    source::{FetchError, TransactionSource},
    transaction::{Transaction, TransactionStatus},
    zone::LocalZone,
};

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// The heading above the list.
    pub table_title: &'static str,
    /// The heading of the total sales card.
    pub sales_card_title: &'static str,
    /// The period covered, e.g. "12 - 19 de Octubre 2026".
    pub date_caption: String,
    /// The caption of the type filter control.
    pub type_filter_caption: String,
    /// The transactions that pass the filters, in fetch order.
    pub transactions: Vec<Transaction>,
    /// Sum of successful amounts in `transactions`, in minor units.
    pub total_amount: i64,
    /// Sum of successful deductions in `transactions`, in minor units.
    pub total_deductions: i64,
    /// How many of `transactions` succeeded.
    pub successful_count: usize,
    /// The message of the last failed fetch, if it failed.
    pub error: Option<String>,
}

/// The display-ready details of a single transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDetail {
    /// The transaction id.
    pub id: String,
    /// Whether the charge was collected.
    pub status: TransactionStatus,
    /// e.g. "Cobro exitoso".
    pub status_name: &'static str,
    /// e.g. "05/10/2024 - 14:07:09".
    pub created_at: String,
    /// e.g. "Tarjeta".
    pub payment_method: &'static str,
    /// e.g. "Visa", for card payments.
    pub franchise: Option<&'static str>,
    /// e.g. "Link de pago".
    pub sales_type: &'static str,
    /// The full reference code.
    pub reference: u64,
    /// The charged amount.
    pub amount: String,
    /// The withheld fee, if any.
    pub deduction: Option<String>,
    /// The amount minus the withheld fee, if a fee was withheld.
    pub net_amount: Option<String>,
}

/// Holds the latest transaction snapshot and the local zone to view it in.
#[derive(Debug, Clone)]
pub struct Dashboard {
    transactions: Vec<Transaction>,
    error: Option<FetchError>,
    zone: LocalZone,
}

impl Dashboard {
    /// An empty dashboard showing local time in `zone`.
    pub fn new(zone: impl Into<LocalZone>) -> Self {
        Self {
            transactions: Vec::new(),
            error: None,
            zone: zone.into(),
        }
    }

    /// A dashboard over an already fetched snapshot.
    pub fn with_transactions(transactions: Vec<Transaction>, zone: impl Into<LocalZone>) -> Self {
        Self {
            transactions,
            error: None,
            zone: zone.into(),
        }
    }

    /// Replace the snapshot with a fresh fetch from `source`.
    ///
    /// On failure the snapshot becomes empty and the error is kept for
    /// [Dashboard::error] and the next view.
    pub async fn refetch<S>(&mut self, source: &S)
    where
        S: TransactionSource,
    {
        match source.fetch_all().await {
            Ok(transactions) => {
                tracing::info!("Loaded {} transactions.", transactions.len());
                self.transactions = transactions;
                self.error = None;
            }
            Err(error) => {
                tracing::error!("Error fetching transactions: {error:?}");
                self.transactions = Vec::new();
                self.error = Some(error);
            }
        }
    }

    /// The whole snapshot, unfiltered.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The error from the last fetch, if it failed.
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// The zone used as local time.
    pub fn zone(&self) -> LocalZone {
        self.zone
    }

    /// Build the view for `state` as of the current time.
    pub fn view(&self, state: &FilterState) -> DashboardView {
        self.view_at(state, self.zone.now())
    }

    /// Build the view for `state` as of `now`.
    pub fn view_at(&self, state: &FilterState, now: OffsetDateTime) -> DashboardView {
        let now = self.zone.to_local(now);
        let transactions = apply_filters(&self.transactions, state, now, self.zone);

        DashboardView {
            table_title: table_title(state.date_filter),
            sales_card_title: sales_card_title(state.date_filter),
            date_caption: date_filter_caption(state.date_filter, now),
            type_filter_caption: transaction_type_filter_caption(&state.transaction_type_filter),
            total_amount: total_successful(&transactions),
            total_deductions: total_deductions(&transactions),
            successful_count: successful_count(&transactions),
            transactions,
            error: self.error.as_ref().map(ToString::to_string),
        }
    }

    /// Look up a transaction in the snapshot by `id`.
    pub fn detail(&self, id: &str) -> Option<TransactionDetail> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .map(|transaction| self.describe(transaction))
    }

    fn describe(&self, transaction: &Transaction) -> TransactionDetail {
        TransactionDetail {
            id: transaction.id.clone(),
            status: transaction.status,
            status_name: status_name(transaction.status),
            created_at: format_date_time(transaction.created_at, self.zone),
            payment_method: payment_method_name(transaction.payment_method),
            franchise: transaction.franchise.map(franchise_name),
            sales_type: sales_type_name(transaction.sales_type),
            reference: transaction.transaction_reference,
            amount: format_currency(transaction.amount),
            deduction: transaction.deduction.map(format_currency),
            net_amount: transaction.net_amount().map(format_currency),
        }
    }
}
