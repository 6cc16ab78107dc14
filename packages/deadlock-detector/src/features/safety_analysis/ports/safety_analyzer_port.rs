/// Safety analyzer port trait
use crate::features::safety_analysis::{AnalysisResult, Result, Snapshot};

/// Port trait for safety analyzers
///
/// Implementations must be pure: no state may survive between calls, so one
/// instance can serve concurrent callers.
pub trait SafetyAnalyzerPort: Send + Sync {
    /// Classify every process of `snapshot` as finished or deadlocked
    fn analyze(&self, snapshot: &Snapshot) -> Result<AnalysisResult>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}
