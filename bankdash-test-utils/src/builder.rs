//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and queued, then executed in order during the
//! final `build()` call: fixtures are inserted first, failures are armed last so seeding never
//! trips them.

use bson::oid::ObjectId;

use crate::{error::TestError, Operation, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Store fixtures to insert
    banks: Vec<String>,
    generated_banks: usize,
    histories: Vec<(ObjectId, usize)>, // (user_id, message_count)

    // Failures to arm after seeding
    failures: Vec<(Operation, usize)>, // (operation, successes before failing)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no fixtures or failures configured.
    pub fn new() -> Self {
        Self {
            banks: Vec::new(),
            generated_banks: 0,
            histories: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Insert a mock bank service with the given name.
    pub fn with_mock_bank(mut self, name: &str) -> Self {
        self.banks.push(name.to_string());
        self
    }

    /// Insert `count` generated bank services named `Bank 00`, `Bank 01`, ...
    ///
    /// Generated banks are inserted before any named bank.
    pub fn with_mock_banks(mut self, count: usize) -> Self {
        self.generated_banks = count;
        self
    }

    /// Insert `count` chat messages for `user_id`, oldest first and one minute apart.
    pub fn with_mock_history(mut self, user_id: ObjectId, count: usize) -> Self {
        self.histories.push((user_id, count));
        self
    }

    /// Make every call to `operation` fail once the test starts.
    pub fn with_failure(self, operation: Operation) -> Self {
        self.with_failure_after(operation, 0)
    }

    /// Let `successes` calls to `operation` succeed, then fail every following call.
    pub fn with_failure_after(mut self, operation: Operation, successes: usize) -> Self {
        self.failures.push((operation, successes));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Store seeded with all configured fixtures
    /// - `Err(TestError)` - Seeding a fixture failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new();

        context.bank().insert_mock_banks(self.generated_banks).await?;
        for name in &self.banks {
            context.bank().insert_mock_bank(name).await?;
        }

        for (user_id, count) in self.histories {
            context.chat().insert_mock_history(user_id, count).await?;
        }

        for (operation, successes) in self.failures {
            context.store.fail_after(operation, successes)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
