//! Shared error types and small helpers used across the crate.

pub mod error;
pub(crate) mod fmt;
pub(crate) mod panic;
pub(crate) mod result;
