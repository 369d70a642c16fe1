//! Shared primitives for the roster service: id types and domain errors.

pub mod error;
pub mod types;
