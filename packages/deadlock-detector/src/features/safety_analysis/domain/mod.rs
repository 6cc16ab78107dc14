//! Domain models for safety analysis
//!
//! - `Snapshot`: the analyzer's sole input (allocation, request, available)
//! - `AnalysisResult`: the analyzer's sole output
//! - `TraceStep`: one audited decision of the work/finish simulation
//!
//! Both `Snapshot` and `AnalysisResult` live for a single detection run.

mod models;
mod trace;

pub use models::*;
pub use trace::*;
