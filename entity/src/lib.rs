//! Documents stored by the bank dashboard.
//!
//! Each module describes the records of one collection together with the helper types the
//! repositories use to write to it.

pub mod bank_service;
pub mod chat_message;

pub mod prelude {
    pub use super::bank_service::Model as BankService;
    pub use super::chat_message::Model as ChatMessage;
}
