//! Core library for Glowbot
//!
//! This crate defines the shared status types and errors used by the
//! Glowbot dashboard server.

pub mod error;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use types::{StatusRecord, StatusVariant};
