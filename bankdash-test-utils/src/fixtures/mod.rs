//! Test fixture modules for seeding the in-memory store.
//!
//! Each submodule provides factory functions building in-memory models and fixture helpers
//! inserting them through the store's collection handles:
//!
//! - `bank` - bank service records
//! - `chat` - per-user chat message history

pub mod bank;
pub mod chat;
