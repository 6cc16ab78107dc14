//! Feature slices
//!
//! Each slice owns its domain types and exposes a small public surface.
//! Only `safety_analysis` contains detection logic; the others feed it
//! input or turn its output into something a person can read.

pub mod input;
pub mod report;
pub mod safety_analysis;
pub mod scenarios;
