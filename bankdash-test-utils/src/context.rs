//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory document store that repositories under test read from and write to.

use bson::oid::ObjectId;

use crate::{store::MemoryStore, Operation, TestError};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_mock_banks(3).build().await?;
///
/// // Hand the store to a repository
/// let repo = BankRepository::new(&test.store, TEST_BANK_COLLECTION);
///
/// // Seed or inspect data through the fixture helpers
/// test.bank().insert_mock_bank("Acme Savings").await?;
/// test.chat().messages_for(user_id)?;
/// ```
pub struct TestContext {
    /// In-memory document store shared with the repositories under test
    pub store: MemoryStore,
}

impl TestContext {
    /// Create a new test context with an empty store.
    pub(crate) fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }

    /// Number of times `operation` reached the store.
    pub fn calls(&self, operation: Operation) -> Result<usize, TestError> {
        Ok(self.store.calls(operation)?)
    }

    /// A fresh user identifier for chat tests.
    pub fn new_user_id(&self) -> ObjectId {
        ObjectId::new()
    }
}
