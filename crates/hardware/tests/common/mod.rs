//! # Common Test Utilities
//!
//! Shared builders and helpers used across the unit test modules.

/// Configuration builders, tracing setup, and stepping helpers.
pub mod harness;
