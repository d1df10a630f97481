//! Collection names and limits shared by all tests.
//!
//! These match the defaults the application falls back to when the corresponding environment
//! variables are unset.

/// Collection holding bank service records in tests.
pub static TEST_BANK_COLLECTION: &str = "banks";

/// Collection holding chat messages in tests.
pub static TEST_CHAT_COLLECTION: &str = "chats";

/// Messages kept per user before the oldest are evicted.
pub const TEST_RETENTION_LIMIT: u64 = 10;
