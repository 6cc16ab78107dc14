//! Deadlock Detection Use Case
//!
//! Runs the safety analyzer on a snapshot and turns its result into a
//! [`DetectionReport`]. Batch runs fan out with rayon: every snapshot is
//! analyzed independently, so no coordination is needed.

use rayon::prelude::*;
use tracing::info;

use crate::config::LabelConfig;
use crate::features::report::DetectionReport;
use crate::features::safety_analysis::{
    AnalysisResult, Result, SafetyAnalyzerPort, Snapshot, WorkFinishAnalyzer,
};

/// Analyze snapshots and build reports
pub struct DeadlockDetectionUseCase<A: SafetyAnalyzerPort = WorkFinishAnalyzer> {
    analyzer: A,
    labels: LabelConfig,
}

impl DeadlockDetectionUseCase<WorkFinishAnalyzer> {
    /// Use case backed by the work/finish analyzer with default labels
    pub fn new() -> Self {
        Self::with_analyzer(WorkFinishAnalyzer::new(), LabelConfig::default())
    }
}

impl Default for DeadlockDetectionUseCase<WorkFinishAnalyzer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: SafetyAnalyzerPort> DeadlockDetectionUseCase<A> {
    pub fn with_analyzer(analyzer: A, labels: LabelConfig) -> Self {
        Self { analyzer, labels }
    }

    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }

    /// Raw analysis, no report
    pub fn analyze(&self, snapshot: &Snapshot) -> Result<AnalysisResult> {
        self.analyzer.analyze(snapshot)
    }

    /// Analyze one snapshot and build its report
    pub fn detect(&self, snapshot: &Snapshot) -> Result<DetectionReport> {
        let result = self.analyzer.analyze(snapshot)?;
        Ok(DetectionReport::build(snapshot, &result, &self.labels))
    }

    /// Analyze named snapshots in parallel
    ///
    /// Output order matches input order. A snapshot with bad dimensions
    /// fails on its own without affecting the others.
    pub fn detect_batch(
        &self,
        snapshots: &[(String, Snapshot)],
    ) -> Vec<(String, Result<DetectionReport>)> {
        let reports: Vec<_> = snapshots
            .par_iter()
            .map(|(name, snapshot)| (name.clone(), self.detect(snapshot)))
            .collect();

        let summary = Self::summarize(reports.iter().map(|(_, r)| r));
        info!(
            "batch detection via {}: total={} safe={} deadlocked={} failed={}",
            self.analyzer.name(),
            summary.total,
            summary.safe,
            summary.deadlocked,
            summary.failed
        );
        reports
    }

    /// Count outcomes of a set of detection runs
    pub fn summarize<'a, I>(outcomes: I) -> DetectionSummary
    where
        I: IntoIterator<Item = &'a Result<DetectionReport>>,
    {
        let mut summary = DetectionSummary::default();
        for outcome in outcomes {
            summary.total += 1;
            match outcome {
                Ok(report) if report.is_safe() => summary.safe += 1,
                Ok(_) => summary.deadlocked += 1,
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }
}

/// Outcome counts of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionSummary {
    pub total: usize,
    pub safe: usize,
    pub deadlocked: usize,
    pub failed: usize,
}
