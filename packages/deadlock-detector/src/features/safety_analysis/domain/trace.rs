use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of the analyzer's audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum TraceStep {
    /// Simulation started with `work = available`
    Started { available: Vec<u64> },
    /// Every outstanding request of `process` fits in the current work vector
    CanFinish { process: usize },
    /// `process` released its allocation; `work` is the pool afterwards
    WorkUpdated { process: usize, work: Vec<u64> },
    /// Fixpoint reached
    Completed { passes: usize, deadlocked: usize },
}

impl TraceStep {
    /// Human-readable line using `prefix` for process labels
    pub fn describe(&self, prefix: &str) -> String {
        match self {
            TraceStep::Started { available } => {
                format!("Starting deadlock detection. Available = {}", join_vector(available))
            }
            TraceStep::CanFinish { process } => format!(
                "{}{} can finish (Request ≤ Work). Releasing its allocation.",
                prefix, process
            ),
            TraceStep::WorkUpdated { work, .. } => {
                format!("Work becomes {}", join_vector(work))
            }
            TraceStep::Completed { passes, deadlocked } => match deadlocked {
                0 => format!("No change after pass {}. All processes finished.", passes),
                n => format!(
                    "No change after pass {}. {} process(es) can never finish.",
                    passes, n
                ),
            },
        }
    }
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("P"))
    }
}

fn join_vector(values: &[u64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
