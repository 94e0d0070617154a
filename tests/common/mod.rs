//! Common test utilities for utm33.
//!
//! Shared helpers for the integration tests.

pub mod assertions;
pub mod test_data;
