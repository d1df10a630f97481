use thiserror::Error;

/// Errors returned by the data access repositories.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The identifier is not a valid hex-encoded object id.
    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),
    /// No record matched a point lookup.
    #[error("No matching record found")]
    NotFound,
    /// An update matched a record but none of its values changed.
    #[error("Update matched a record but changed nothing")]
    NoChange,
    /// A bank service with the same name already exists.
    #[error("A bank service named {0:?} already exists")]
    AlreadyExists(String),
    /// Page numbers and page sizes start at 1.
    #[error("Invalid pagination: page {page}, size {size} (both must be at least 1)")]
    InvalidPagination { page: u64, size: u64 },
    /// Document store error (connection, command or cursor failure).
    #[error(transparent)]
    StoreError(#[from] docstore::StoreError),
    /// Failed to encode a record as BSON.
    #[error(transparent)]
    EncodeError(#[from] bson::ser::Error),
    /// Failed to decode a stored document.
    #[error(transparent)]
    DecodeError(#[from] bson::de::Error),
}
