//! Detection report
//!
//! Turns one `AnalysisResult` into what a person reads: a safe/deadlocked
//! status, the safe sequence or deadlocked set as labels, a per-process load
//! figure, and a textual resource-allocation graph. Nothing here feeds back
//! into detection.

mod graph_view;
mod models;
pub mod render;

pub use graph_view::{GraphEdge, GraphView, ProcessEdges};
pub use models::{DetectionReport, DetectionStatus, ProcessLoad};
