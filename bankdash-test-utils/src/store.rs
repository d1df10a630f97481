//! In-memory document store.
//!
//! This module provides `MemoryStore`, a [`DocumentStore`] that keeps every collection in a
//! `Vec<Document>` behind a mutex. It evaluates top-level equality filters, stable multi-field
//! sorts, skip/limit and `$set` updates the way MongoDB does for the queries the repositories
//! issue, which lets repository tests run without a database server.
//!
//! Failures can be injected per operation to exercise error propagation paths, and every call is
//! counted so tests can assert an operation never reached the store.

use std::{
    cmp::Ordering,
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use docstore::{Collection, DocumentStore, FindOptions, StoreError, UpdateOutcome};

/// Store operations that can be counted or made to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    FindOne,
    Find,
    Count,
    InsertOne,
    UpdateOne,
    DeleteOne,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::FindOne => "find_one",
            Operation::Find => "find",
            Operation::Count => "count",
            Operation::InsertOne => "insert_one",
            Operation::UpdateOne => "update_one",
            Operation::DeleteOne => "delete_one",
        };

        f.write_str(name)
    }
}

/// An armed failure: lets `remaining_successes` calls through, then fails every call.
#[derive(Clone, Copy, Debug)]
struct Failure {
    operation: Operation,
    remaining_successes: usize,
}

#[derive(Default)]
struct StoreState {
    collections: HashMap<String, Vec<Document>>,
    failures: Vec<Failure>,
    calls: HashMap<Operation, usize>,
}

impl StoreState {
    /// Records a call to `operation` and returns an error if a failure is armed for it.
    fn enter(&mut self, operation: Operation) -> Result<(), StoreError> {
        *self.calls.entry(operation).or_insert(0) += 1;

        for failure in self
            .failures
            .iter_mut()
            .filter(|f| f.operation == operation)
        {
            if failure.remaining_successes == 0 {
                return Err(StoreError::Unavailable(format!(
                    "injected {} failure",
                    operation
                )));
            }
            failure.remaining_successes -= 1;
        }

        Ok(())
    }

    fn documents(&mut self, collection: &str) -> &mut Vec<Document> {
        self.collections.entry(collection.to_string()).or_default()
    }
}

/// Shared in-memory [`DocumentStore`].
///
/// Clones share the same underlying collections.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    /// Creates an empty store with no armed failures
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call to `operation` fail.
    pub fn fail_on(&self, operation: Operation) -> Result<(), StoreError> {
        self.fail_after(operation, 0)
    }

    /// Lets `successes` calls to `operation` through, then fails every following call.
    pub fn fail_after(&self, operation: Operation, successes: usize) -> Result<(), StoreError> {
        lock(&self.state)?.failures.push(Failure {
            operation,
            remaining_successes: successes,
        });

        Ok(())
    }

    /// Removes all armed failures.
    pub fn clear_failures(&self) -> Result<(), StoreError> {
        lock(&self.state)?.failures.clear();

        Ok(())
    }

    /// Number of times `operation` was invoked on any collection, including failed calls.
    pub fn calls(&self, operation: Operation) -> Result<usize, StoreError> {
        Ok(lock(&self.state)?
            .calls
            .get(&operation)
            .copied()
            .unwrap_or(0))
    }

    /// Snapshot of a collection's documents in natural (insertion) order.
    pub fn documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(lock(&self.state)?
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}

impl DocumentStore for MemoryStore {
    type Collection = MemoryCollection;

    fn collection(&self, name: &str) -> MemoryCollection {
        MemoryCollection {
            name: name.to_string(),
            state: Arc::clone(&self.state),
        }
    }
}

/// Handle to one collection of a [`MemoryStore`].
#[derive(Clone)]
pub struct MemoryCollection {
    name: String,
    state: Arc<Mutex<StoreState>>,
}

#[async_trait]
impl Collection for MemoryCollection {
    async fn find_one(&self, filter: Document) -> Result<Option<Document>, StoreError> {
        let mut state = lock(&self.state)?;
        state.enter(Operation::FindOne)?;

        Ok(state
            .documents(&self.name)
            .iter()
            .find(|document| matches(document, &filter))
            .cloned())
    }

    async fn find(
        &self,
        filter: Document,
        options: FindOptions,
    ) -> Result<Vec<Document>, StoreError> {
        let mut state = lock(&self.state)?;
        state.enter(Operation::Find)?;

        let mut found: Vec<Document> = state
            .documents(&self.name)
            .iter()
            .filter(|document| matches(document, &filter))
            .cloned()
            .collect();

        if let Some(sort) = &options.sort {
            // `sort_by` is stable, ties keep insertion order
            found.sort_by(|a, b| compare_by_sort(a, b, sort));
        }

        let skip = options
            .skip
            .map_or(0, |skip| usize::try_from(skip).unwrap_or(usize::MAX));
        // A limit of 0 means no limit, as with MongoDB
        let limit = match options.limit {
            None | Some(0) => usize::MAX,
            Some(limit) => usize::try_from(limit).unwrap_or(usize::MAX),
        };

        Ok(found.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self, filter: Document) -> Result<u64, StoreError> {
        let mut state = lock(&self.state)?;
        state.enter(Operation::Count)?;

        let count = state
            .documents(&self.name)
            .iter()
            .filter(|document| matches(document, &filter))
            .count();

        Ok(count as u64)
    }

    async fn insert_one(&self, document: Document) -> Result<Bson, StoreError> {
        let mut state = lock(&self.state)?;
        state.enter(Operation::InsertOne)?;

        let id = match document.get("_id") {
            Some(id) => id.clone(),
            None => Bson::ObjectId(ObjectId::new()),
        };

        let documents = state.documents(&self.name);
        if documents
            .iter()
            .any(|existing| existing.get("_id") == Some(&id))
        {
            return Err(StoreError::Unavailable(format!(
                "duplicate _id {} in collection {}",
                id, self.name
            )));
        }

        let mut stored = Document::new();
        stored.insert("_id", id.clone());
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }
        documents.push(stored);

        Ok(id)
    }

    async fn update_one(
        &self,
        filter: Document,
        set: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut state = lock(&self.state)?;
        state.enter(Operation::UpdateOne)?;

        let Some(document) = state
            .documents(&self.name)
            .iter_mut()
            .find(|document| matches(document, &filter))
        else {
            return Ok(UpdateOutcome::default());
        };

        let mut modified = false;
        for (key, value) in set {
            if document.get(&key) != Some(&value) {
                document.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(modified),
        })
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, StoreError> {
        let mut state = lock(&self.state)?;
        state.enter(Operation::DeleteOne)?;

        let documents = state.documents(&self.name);
        match documents
            .iter()
            .position(|document| matches(document, &filter))
        {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

fn lock(state: &Mutex<StoreState>) -> Result<MutexGuard<'_, StoreState>, StoreError> {
    state
        .lock()
        .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
}

/// Top-level equality match; an empty filter matches everything.
fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

fn compare_by_sort(a: &Document, b: &Document, sort: &Document) -> Ordering {
    for (key, direction) in sort {
        let ordering = compare_values(a.get(key), b.get(key));
        let ordering = if is_descending(direction) {
            ordering.reverse()
        } else {
            ordering
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

fn is_descending(direction: &Bson) -> bool {
    match direction {
        Bson::Int32(value) => *value < 0,
        Bson::Int64(value) => *value < 0,
        Bson::Double(value) => *value < 0.0,
        _ => false,
    }
}

/// Orders the value types the repositories sort on. Missing fields sort first; values of
/// unrelated types compare equal.
fn compare_values(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Bson::DateTime(a), Bson::DateTime(b)) => a.cmp(b),
            (Bson::String(a), Bson::String(b)) => a.cmp(b),
            (Bson::ObjectId(a), Bson::ObjectId(b)) => a.bytes().cmp(&b.bytes()),
            (Bson::Boolean(a), Bson::Boolean(b)) => a.cmp(b),
            _ => match (as_f64(a), as_f64(b)) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        },
    }
}

fn as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(value) => Some(f64::from(*value)),
        Bson::Int64(value) => Some(*value as f64),
        Bson::Double(value) => Some(*value),
        _ => None,
    }
}
