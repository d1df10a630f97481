//! Bank service fixture utilities.

pub mod data;
pub mod factory;

use crate::TestContext;

impl TestContext {
    pub fn bank<'a>(&'a self) -> BankFixtures<'a> {
        BankFixtures { context: self }
    }
}

pub struct BankFixtures<'a> {
    pub context: &'a TestContext,
}
