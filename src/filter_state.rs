//! The filter selection applied to the transactions list, and the pure
//! transitions between selections.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The date window to show transactions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    /// The local calendar day of "now".
    #[default]
    Today,
    /// From the start of the day seven days ago up to "now".
    Week,
    /// Any October, regardless of year.
    October,
    /// A value this version does not know about, e.g. from a newer persisted
    /// record. Matches every transaction.
    #[serde(other)]
    Unrecognized,
}

impl DateFilter {
    /// The persisted/query form, e.g. `"week"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::October => "october",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "october" => Ok(Self::October),
            other => Err(format!(
                "unknown date filter \"{other}\", expected one of: today, week, october"
            )),
        }
    }
}

/// A tag in the transaction type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionTypeFilter {
    /// Sales through a card terminal.
    Terminal,
    /// Sales through a payment link.
    PaymentLink,
    /// Wildcard: no restriction on the sales channel.
    All,
    /// A tag this version does not know about. Never matches, but does not
    /// disable the wildcard either.
    #[serde(other)]
    Unrecognized,
}

impl TransactionTypeFilter {
    /// The persisted/query form, e.g. `"payment_link"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::PaymentLink => "payment_link",
            Self::All => "all",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for TransactionTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionTypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terminal" => Ok(Self::Terminal),
            "payment_link" => Ok(Self::PaymentLink),
            "all" => Ok(Self::All),
            other => Err(format!(
                "unknown transaction type \"{other}\", expected one of: terminal, payment_link, all"
            )),
        }
    }
}

/// The active filter selection.
///
/// This is a plain parameter to [crate::apply_filters]; it never refers to
/// specific transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// The date window.
    pub date_filter: DateFilter,
    /// The selected sales channels. Empty or containing
    /// [TransactionTypeFilter::All] means no restriction.
    pub transaction_type_filter: BTreeSet<TransactionTypeFilter>,
    /// Free text searched across several fields of each transaction.
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            date_filter: DateFilter::Today,
            transaction_type_filter: BTreeSet::from([TransactionTypeFilter::All]),
            search_term: String::new(),
        }
    }
}

/// A change to the filter selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Replace the date window.
    SetDateFilter(DateFilter),
    /// Replace the sales channel selection.
    SetTransactionTypeFilter(BTreeSet<TransactionTypeFilter>),
    /// Replace the search text.
    SetSearchTerm(String),
    /// Go back to [FilterState::default].
    Reset,
}

impl FilterState {
    /// Apply `action`, returning the next state.
    ///
    /// Setters replace only the targeted field and keep the rest.
    pub fn reduce(self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetDateFilter(date_filter) => Self {
                date_filter,
                ..self
            },
            FilterAction::SetTransactionTypeFilter(transaction_type_filter) => Self {
                transaction_type_filter,
                ..self
            },
            FilterAction::SetSearchTerm(search_term) => Self {
                search_term,
                ..self
            },
            FilterAction::Reset => Self::default(),
        }
    }
}
