//! Saving and loading the filter selection so it survives restarts.
//!
//! The selection is stored as a single JSON record in SQLite, keyed by a
//! fixed namespace. Only the [FilterState] is stored, never transactions.
//!
//! The record carries no schema version. Renaming a field makes existing
//! records unreadable, and they then fall back to the default selection.

use std::{
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use rusqlite::{Connection, OptionalExtension};

use crate::filter_state::FilterState;

/// The key the filter selection is stored under.
pub const FILTER_STATE_NAMESPACE: &str = "transactions-filters";

const FILTER_STATE_TABLE: &str = "filter_state";

/// Errors from reading or writing the persisted filter selection.
///
/// These are never shown to the user. Callers fall back to the default
/// selection on load and log failed saves.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The database could not be opened, read or written.
    #[error("could not access the filter state database: {0}")]
    Sql(#[from] rusqlite::Error),

    /// The stored record is not a valid filter selection.
    #[error("the persisted filter state is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Somewhere the filter selection can be saved to and restored from.
pub trait FilterStatePersistence {
    /// Load the saved selection, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<FilterState>, PersistenceError>;

    /// Replace the saved selection with `state`.
    fn save(&self, state: &FilterState) -> Result<(), PersistenceError>;

    /// Load the saved selection, falling back to [FilterState::default] when
    /// nothing was saved or the saved record cannot be read.
    fn load_or_default(&self) -> FilterState {
        match self.load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                tracing::debug!("No persisted filter state, using defaults.");
                FilterState::default()
            }
            Err(error) => {
                tracing::warn!("Could not restore filter state, using defaults: {error}");
                FilterState::default()
            }
        }
    }
}

/// Create the filter state table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_filter_state_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                namespace TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            table = FILTER_STATE_TABLE
        ),
        (),
    )?;

    Ok(())
}

/// Saves `state` under [FILTER_STATE_NAMESPACE], replacing any earlier record.
///
/// # Errors
/// Returns [PersistenceError::Sql] if the write fails.
pub fn save_filter_state(state: &FilterState, connection: &Connection) -> Result<(), PersistenceError> {
    let value = serde_json::to_string(state)?;

    connection.execute(
        &format!(
            "INSERT INTO {table} (namespace, value) VALUES (?1, ?2)
             ON CONFLICT(namespace) DO UPDATE SET value = excluded.value",
            table = FILTER_STATE_TABLE
        ),
        (FILTER_STATE_NAMESPACE, value),
    )?;

    Ok(())
}

/// Loads the record stored under [FILTER_STATE_NAMESPACE].
///
/// # Returns
/// `None` if no record has been saved.
///
/// # Errors
/// Returns [PersistenceError::Sql] if the read fails, or
/// [PersistenceError::Corrupt] if the record is not a valid [FilterState].
pub fn load_filter_state(connection: &Connection) -> Result<Option<FilterState>, PersistenceError> {
    let value: Option<String> = connection
        .query_row(
            &format!(
                "SELECT value FROM {table} WHERE namespace = ?1",
                table = FILTER_STATE_TABLE
            ),
            [FILTER_STATE_NAMESPACE],
            |row| row.get(0),
        )
        .optional()?;

    match value {
        Some(value) => Ok(Some(serde_json::from_str(&value)?)),
        None => Ok(None),
    }
}

/// Persists the filter selection in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteFilterStatePersistence {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteFilterStatePersistence {
    /// Use an already open `connection`, creating the table if needed.
    ///
    /// # Errors
    /// Returns [PersistenceError::Sql] if the table cannot be created.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Result<Self, PersistenceError> {
        create_filter_state_table(
            &connection.lock().unwrap_or_else(PoisonError::into_inner),
        )?;

        Ok(Self { connection })
    }

    /// Open (or create) the database file at `path`.
    ///
    /// # Errors
    /// Returns [PersistenceError::Sql] if the file cannot be opened or the
    /// table cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let connection = Connection::open(path)?;

        Self::new(Arc::new(Mutex::new(connection)))
    }

    /// A database that lives only as long as this value.
    ///
    /// # Errors
    /// Returns [PersistenceError::Sql] if the database cannot be created.
    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        let connection = Connection::open_in_memory()?;

        Self::new(Arc::new(Mutex::new(connection)))
    }
}

impl FilterStatePersistence for SQLiteFilterStatePersistence {
    fn load(&self) -> Result<Option<FilterState>, PersistenceError> {
        let connection = self
            .connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        load_filter_state(&connection)
    }

    fn save(&self, state: &FilterState) -> Result<(), PersistenceError> {
        let connection = self
            .connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        save_filter_state(state, &connection)
    }
}
