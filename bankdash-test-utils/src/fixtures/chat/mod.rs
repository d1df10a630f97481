//! Chat history fixture utilities.

pub mod data;
pub mod factory;

use crate::TestContext;

impl TestContext {
    pub fn chat<'a>(&'a self) -> ChatFixtures<'a> {
        ChatFixtures { context: self }
    }
}

pub struct ChatFixtures<'a> {
    pub context: &'a TestContext,
}
