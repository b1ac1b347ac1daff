//! Defines the crate level error type.

use crate::{persistence::PersistenceError, source::FetchError};

/// The errors that may occur while running the dashboard.
///
/// Filtering and aggregation never fail, so they have no variants here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transaction list could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The filter selection could not be saved or restored.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// The configured timezone is not a known canonical name.
    #[error("unknown timezone \"{0}\", expected a canonical name such as \"America/Bogota\"")]
    UnknownTimezone(String),
}
