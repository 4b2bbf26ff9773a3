//! Shared module - Common types and utilities
//!
//! Types shared by the graph, every package factory and the validator.

#[macro_use]
pub mod macros;
pub mod models;

pub use models::*;
