pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod store;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use store::{MemoryCollection, MemoryStore, Operation};

pub mod prelude {
    pub use crate::{
        constant::{TEST_BANK_COLLECTION, TEST_CHAT_COLLECTION, TEST_RETENTION_LIMIT},
        fixtures::{bank::factory as bank_factory, chat::factory as chat_factory},
        Operation, TestBuilder, TestContext, TestError,
    };
}
