//! brotlify integration test support
//!
//! Shared fixtures for the tests under `tests/`.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Unified test utilities
pub mod test_utils;
