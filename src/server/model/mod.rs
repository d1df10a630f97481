//! Application models and type definitions.
//!
//! Application state handed to the outer (HTTP) layer and aliases for the stored document
//! models.

pub mod app;
pub mod db;
