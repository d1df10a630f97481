use thiserror::Error;

/// Errors raised by a document store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// MongoDB driver error (connection, command or cursor failure).
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
    /// The backend refused to run the operation.
    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}
