pub mod application;
/// Safety Analysis Feature
///
/// Decides whether a multi-process, multi-resource snapshot is safe or
/// deadlocked using the work/finish fixpoint simulation.
///
/// ## Features
/// - **Work/Finish Simulation**: Banker's-style safety check over an
///   outstanding-request matrix
/// - **Safe Sequence**: Completion order for every finishable process
/// - **Audit Trace**: Step-by-step record of each decision
///
/// ## Architecture
/// - **Domain**: Snapshot, AnalysisResult, TraceStep
/// - **Infrastructure**: `analyze` + WorkFinishAnalyzer
/// - **Application**: DeadlockDetectionUseCase (analysis + report)
/// - **Ports**: SafetyAnalyzerPort trait
///
/// ## Performance
/// - Algorithm: O(n² · m) worst case, at most n passes
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-export application layer (primary interface)
pub use application::*;

// Re-export domain types
pub use domain::*;

pub use infrastructure::*;

pub use ports::*;
