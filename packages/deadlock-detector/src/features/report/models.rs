use std::fmt;

use serde::{Deserialize, Serialize};

use super::graph_view::GraphView;
use crate::config::LabelConfig;
use crate::features::safety_analysis::{AnalysisResult, Snapshot};

/// Overall verdict of a detection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStatus {
    /// Every process can complete
    Safe,
    /// At least one process can never complete
    Deadlocked,
}

impl DetectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "No Deadlock",
            Self::Deadlocked => "Deadlock Detected",
        }
    }
}

impl fmt::Display for DetectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative load of one process: Σ_j (allocation + request)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessLoad {
    pub process: String,
    pub load: u64,
    /// Drawn differently from completable processes
    pub deadlocked: bool,
}

/// Everything shown to the user after one detection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub status: DetectionStatus,
    pub process_count: usize,
    pub resource_count: usize,
    /// Labels in completion order (empty when nothing could finish)
    pub safe_sequence: Vec<String>,
    /// Labels of processes that can never finish
    pub deadlocked: Vec<String>,
    pub loads: Vec<ProcessLoad>,
    pub graph: GraphView,
    /// Trace entries rendered as text
    pub trace: Vec<String>,
    pub final_work: Vec<u64>,
}

impl DetectionReport {
    pub fn build(snapshot: &Snapshot, result: &AnalysisResult, labels: &LabelConfig) -> Self {
        let status = if result.is_safe() {
            DetectionStatus::Safe
        } else {
            DetectionStatus::Deadlocked
        };

        let loads = (0..snapshot.process_count)
            .map(|i| ProcessLoad {
                process: labels.process(i),
                load: snapshot.load_of(i),
                deadlocked: result.is_deadlocked(i),
            })
            .collect();

        Self {
            status,
            process_count: snapshot.process_count,
            resource_count: snapshot.resource_count,
            safe_sequence: result
                .safe_sequence
                .iter()
                .map(|&i| labels.process(i))
                .collect(),
            deadlocked: result.deadlocked.iter().map(|&i| labels.process(i)).collect(),
            loads,
            graph: GraphView::build(snapshot, labels),
            trace: result
                .trace
                .iter()
                .map(|step| step.describe(&labels.process_prefix))
                .collect(),
            final_work: result.work.clone(),
        }
    }

    pub fn is_safe(&self) -> bool {
        self.status == DetectionStatus::Safe
    }

    /// "P0 → P2 → P1"
    pub fn safe_sequence_chain(&self) -> String {
        self.safe_sequence.join(" → ")
    }

    /// One-line verdict
    pub fn summary_line(&self) -> String {
        match self.status {
            DetectionStatus::Safe => {
                format!("{}. Safe sequence: {}", self.status, self.safe_sequence_chain())
            }
            DetectionStatus::Deadlocked => format!(
                "{}. Some processes can never complete. Deadlocked: {}",
                self.status,
                self.deadlocked.join(", ")
            ),
        }
    }
}
