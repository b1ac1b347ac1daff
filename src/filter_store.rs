//! The shared, observable holder of the active filter selection.

use std::{
    collections::BTreeSet,
    sync::{
        Mutex, PoisonError, RwLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::{
    filter_state::{DateFilter, FilterAction, FilterState, TransactionTypeFilter},
    persistence::FilterStatePersistence,
};

/// Identifies a subscription so that it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Subscriber = Box<dyn Fn(&FilterState) + Send + Sync>;

/// Holds the filter selection for the whole application.
///
/// Every change goes through [FilterState::reduce] and is visible to readers
/// as soon as the setter returns. Subscribers are called synchronously after
/// each change with the new selection, in the order they subscribed.
///
/// Subscribers may read the store but must not change it or subscribe from
/// inside their callback.
pub struct FilterStore {
    state: RwLock<FilterState>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription_id: AtomicUsize,
}

impl FilterStore {
    /// Create a store holding `initial`, with nothing persisted.
    pub fn new(initial: FilterState) -> Self {
        Self {
            state: RwLock::new(initial),
            subscribers: Mutex::new(Vec::new()),
            next_subscription_id: AtomicUsize::new(0),
        }
    }

    /// Create a store restored from `persistence` that saves every change
    /// back to it.
    ///
    /// A missing or unreadable record gives the default selection. Failed
    /// saves are logged and otherwise ignored.
    pub fn persisted<P>(persistence: P) -> Self
    where
        P: FilterStatePersistence + Send + Sync + 'static,
    {
        let store = Self::new(persistence.load_or_default());

        store.subscribe(move |state| {
            if let Err(error) = persistence.save(state) {
                tracing::warn!("Could not persist filter state: {error}");
            }
        });

        store
    }

    /// A copy of the current selection.
    pub fn get(&self) -> FilterState {
        self.read().clone()
    }

    /// Read one part of the current selection without copying the rest.
    pub fn select<T>(&self, selector: impl FnOnce(&FilterState) -> T) -> T {
        selector(&self.read())
    }

    /// The current date window.
    pub fn date_filter(&self) -> DateFilter {
        self.select(|state| state.date_filter)
    }

    /// The current sales channel selection.
    pub fn transaction_type_filter(&self) -> BTreeSet<TransactionTypeFilter> {
        self.select(|state| state.transaction_type_filter.clone())
    }

    /// The current search text.
    pub fn search_term(&self) -> String {
        self.select(|state| state.search_term.clone())
    }

    /// Replace the date window.
    pub fn set_date_filter(&self, date_filter: DateFilter) {
        self.dispatch(FilterAction::SetDateFilter(date_filter));
    }

    /// Replace the sales channel selection.
    pub fn set_transaction_type_filter(
        &self,
        selection: impl IntoIterator<Item = TransactionTypeFilter>,
    ) {
        self.dispatch(FilterAction::SetTransactionTypeFilter(
            selection.into_iter().collect(),
        ));
    }

    /// Replace the search text.
    pub fn set_search_term(&self, search_term: impl Into<String>) {
        self.dispatch(FilterAction::SetSearchTerm(search_term.into()));
    }

    /// Go back to the default selection.
    pub fn reset(&self) {
        self.dispatch(FilterAction::Reset);
    }

    /// Apply `action` and notify subscribers.
    ///
    /// Concurrent dispatches are serialized, so subscribers see the changes
    /// in the same order they were written.
    pub fn dispatch(&self, action: FilterAction) {
        // Held until every subscriber has been called.
        let subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let next = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let next = state.clone().reduce(action);
            *state = next.clone();
            next
        };

        tracing::debug!("Filter state changed to {next:?}");

        for (_, subscriber) in subscribers.iter() {
            subscriber(&next);
        }
    }

    /// Call `subscriber` with the new selection after every change.
    pub fn subscribe(
        &self,
        subscriber: impl Fn(&FilterState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id.fetch_add(1, Ordering::Relaxed));
        let subscriber: Subscriber = Box::new(subscriber);

        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, subscriber));

        id
    }

    /// Stop notifying the subscription `id`.
    ///
    /// Returns `false` if there was no such subscription.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let count_before = subscribers.len();

        subscribers.retain(|(subscription_id, _)| *subscription_id != id);

        subscribers.len() != count_before
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, FilterState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

impl std::fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStore")
            .field("state", &*self.read())
            .finish_non_exhaustive()
    }
}
