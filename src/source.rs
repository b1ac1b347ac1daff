//! Fetching the full transaction list from the remote endpoint.

use std::{future::Future, time::Duration};

use reqwest::{StatusCode, header::CONTENT_TYPE};
use serde::Deserialize;

use crate::transaction::Transaction;

/// Where the dashboard fetches transactions from unless told otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://bold-fe-api.vercel.app/api";

/// Why the transaction list could not be fetched.
///
/// The display form is meant to be shown to the user next to a retry option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The endpoint could not be reached, or the connection dropped while
    /// reading the response.
    #[error("Error de conexión. Verifica tu conexión a internet e intenta nuevamente.")]
    Network {
        /// The underlying client error, for logs.
        detail: String,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("{message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The `message` from the error body, or a generic message with the
        /// status code and reason.
        message: String,
    },

    /// The response body was not the expected `{"data": [...]}` shape.
    #[error("La respuesta del servidor no es válida: {0}")]
    MalformedPayload(String),
}

/// Something that returns the complete, current transaction list.
///
/// There is no paging: every call returns the whole collection or fails.
pub trait TransactionSource {
    /// Fetch every transaction.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Transaction>, FetchError>> + Send;
}

#[derive(Debug, Deserialize)]
struct TransactionsResponse {
    data: Vec<Transaction>,
}

/// Fetches transactions over HTTP with a `GET` to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransactionSource {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpTransactionSource {
    /// Create a source for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The URL transactions are fetched from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransactionSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl TransactionSource for HttpTransactionSource {
    async fn fetch_all(&self) -> Result<Vec<Transaction>, FetchError> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let response: TransactionsResponse = serde_json::from_str(&body)
            .map_err(|error| FetchError::MalformedPayload(error.to_string()))?;

        tracing::debug!(
            "Fetched {} transactions from {}",
            response.data.len(),
            self.endpoint
        );

        Ok(response.data)
    }
}

fn network_error(error: reqwest::Error) -> FetchError {
    FetchError::Network {
        detail: error.to_string(),
    }
}

/// Use the `message` field of a JSON error body if there is one.
fn status_error(status: StatusCode, body: &str) -> FetchError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|message| message.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| {
            format!(
                "Error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            )
        });

    FetchError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Call `source` until it succeeds, trying at most `retries` more times after
/// the first failure and waiting `delay` between attempts.
///
/// # Errors
/// Returns the error from the last attempt.
pub async fn fetch_with_retry<S>(
    source: &S,
    retries: u32,
    delay: Duration,
) -> Result<Vec<Transaction>, FetchError>
where
    S: TransactionSource + Sync,
{
    let mut attempt = 0;

    loop {
        match source.fetch_all().await {
            Ok(transactions) => return Ok(transactions),
            Err(error) if attempt < retries => {
                attempt += 1;
                tracing::warn!("Fetching transactions failed (attempt {attempt}): {error:?}");
                tokio::time::sleep(delay).await;
            }
            Err(error) => return Err(error),
        }
    }
}
