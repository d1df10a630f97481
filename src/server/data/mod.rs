//! Data access layer repositories.
//!
//! Each repository wraps one collection of the document store: bank services and the per-user
//! chat log. Repositories are generic over [`docstore::DocumentStore`] so they run against
//! MongoDB in production and the in-memory store in tests.

pub mod bank;
pub mod chat;


use bson::oid::ObjectId;

use crate::server::error::repository::RepositoryError;

/// Parses a hex-encoded object id received from outside the data layer.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_string()))
}
