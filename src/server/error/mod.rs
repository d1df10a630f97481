//! Error types for the bank dashboard data layer.
//!
//! This module groups errors by concern: configuration loading and repository operations.
//! All errors use `thiserror` for `Display` and `Error` implementations, and the top-level
//! [`Error`] aggregates them so startup code can use `?` across concerns.

pub mod config;
pub mod repository;

use thiserror::Error;

use crate::server::error::{config::ConfigError, repository::RepositoryError};

/// Main error type for the bank dashboard data layer.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Repository errors (invalid ids, missing records, duplicate names, store failures)
/// - MongoDB driver errors raised while connecting
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Repository operation error.
    #[error(transparent)]
    RepositoryError(#[from] RepositoryError),
    /// MongoDB error (client construction, connection, ping).
    #[error(transparent)]
    MongoError(#[from] mongodb::error::Error),
}
