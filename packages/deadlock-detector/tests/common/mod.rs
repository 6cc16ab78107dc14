//! Common test utilities for deadlock-detector
//!
//! Snapshot builders and the checks shared by integration and property tests.

mod builders;

pub use builders::*;
