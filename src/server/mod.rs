//! Server-side data layer of the bank dashboard.
//!
//! This module contains the document store repositories for bank services and the bounded
//! per-user chat log, together with configuration loading, error types and startup helpers
//! used by the HTTP layer that consumes them.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod startup;
