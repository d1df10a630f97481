//! Query options and write outcomes shared by all backends.

use bson::Document;

/// Options for [`Collection::find`](crate::Collection::find).
///
/// Mirrors the subset of MongoDB's find options the repositories rely on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindOptions {
    /// Number of matching documents to skip before returning results
    pub skip: Option<u64>,
    /// Maximum number of documents to return
    pub limit: Option<u64>,
    /// Sort specification, `1` for ascending and `-1` for descending per field
    pub sort: Option<Document>,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort(mut self, sort: Document) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Result of an `update_one` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Documents matched by the filter (0 or 1)
    pub matched: u64,
    /// Documents whose stored values actually changed (0 or 1)
    pub modified: u64,
}
