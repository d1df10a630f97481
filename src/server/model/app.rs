use docstore::DocumentStore;

use crate::server::{
    config::Config,
    data::{bank::BankRepository, chat::ChatRepository},
};

/// Document store plus the configuration the repositories are built from.
#[derive(Clone)]
pub struct AppState<S: DocumentStore> {
    pub store: S,
    pub config: Config,
}

impl<S: DocumentStore> AppState<S> {
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Bank service repository over the configured collection
    pub fn bank_repository(&self) -> BankRepository<'_, S> {
        BankRepository::new(&self.store, &self.config.bank_collection)
    }

    /// Chat repository over the configured collection and retention limit
    pub fn chat_repository(&self) -> ChatRepository<'_, S> {
        ChatRepository::new(
            &self.store,
            &self.config.chat_collection,
            self.config.chat_retention_limit,
        )
    }
}
