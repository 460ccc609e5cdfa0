use thiserror::Error;

/// Failure while loading the inventory collection.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document store answered with a non-success status.
    #[error("Error {status}: {message}")]
    Http { status: u16, message: String },
    /// The request never produced a response (CORS, offline, no window).
    #[error("{0}")]
    Network(String),
    /// The response body was not a document list.
    #[error("Failed to decode inventory: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure while reading or writing session-scoped state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to write session storage: {0}")]
    Write(String),
    #[error("Failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}
