use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::TraceStep;

// ═══════════════════════════════════════════════════════════════════════════
// Snapshot
// ═══════════════════════════════════════════════════════════════════════════

/// Resource allocation state of an n-process, m-resource system
///
/// `request` is the outstanding need of each process (what it still has to
/// acquire before it can complete), not a cumulative maximum demand.
/// `available` is taken as ground truth; nothing ties it to the sum of
/// allocations.
///
/// Cells are signed so that lenient callers can pass what they parsed;
/// the analyzer treats negative units as zero.
///
/// # Examples
///
/// ```rust
/// use deadlock_detector::Snapshot;
///
/// let snapshot = Snapshot::new(
///     vec![vec![1, 0], vec![0, 1]],
///     vec![vec![0, 0], vec![0, 0]],
///     vec![0, 0],
/// );
/// assert_eq!(snapshot.process_count, 2);
/// assert_eq!(snapshot.resource_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Number of processes (n)
    pub process_count: usize,
    /// Number of resource types (m)
    pub resource_count: usize,
    /// n×m units currently held: `allocation[i][j]`
    pub allocation: Vec<Vec<i64>>,
    /// n×m units still needed: `request[i][j]`
    pub request: Vec<Vec<i64>>,
    /// m units not allocated to anyone
    pub available: Vec<i64>,
}

impl Snapshot {
    /// Create a snapshot, taking n from the allocation rows and m from `available`
    pub fn new(allocation: Vec<Vec<i64>>, request: Vec<Vec<i64>>, available: Vec<i64>) -> Self {
        Self {
            process_count: allocation.len(),
            resource_count: available.len(),
            allocation,
            request,
            available,
        }
    }

    /// Create a snapshot with explicitly declared dimensions
    ///
    /// The declared dimensions are what the analyzer validates the matrices against.
    pub fn with_dimensions(
        process_count: usize,
        resource_count: usize,
        allocation: Vec<Vec<i64>>,
        request: Vec<Vec<i64>>,
        available: Vec<i64>,
    ) -> Self {
        Self {
            process_count,
            resource_count,
            allocation,
            request,
            available,
        }
    }

    /// Relative load of process `i`: Σ_j (allocation[i][j] + request[i][j])
    ///
    /// Negative cells count as zero and the total saturates at `u64::MAX`.
    /// Rows shorter than expected contribute only what they have.
    pub fn load_of(&self, process: usize) -> u64 {
        let held = row_units(self.allocation.get(process).map(Vec::as_slice));
        let needed = row_units(self.request.get(process).map(Vec::as_slice));
        held.saturating_add(needed)
    }
}

/// Saturating unit total of an optional row
fn row_units(row: Option<&[i64]>) -> u64 {
    row.map_or(0, |row| {
        row.iter().fold(0u64, |acc, &v| acc.saturating_add(units(v)))
    })
}

/// Clamp a signed cell to a unit count (negative → 0)
pub fn units(value: i64) -> u64 {
    value.max(0) as u64
}

// ═══════════════════════════════════════════════════════════════════════════
// AnalysisResult
// ═══════════════════════════════════════════════════════════════════════════

/// Outcome of one safety analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Final simulated resource pool (starts at `available`, never decreases)
    pub work: Vec<u64>,
    /// Completion status per process
    pub finished: Vec<bool>,
    /// Processes in the order they were marked finished
    pub safe_sequence: Vec<usize>,
    /// Processes never marked finished; empty iff the snapshot is safe
    pub deadlocked: BTreeSet<usize>,
    /// Audit trail of the simulation (display only)
    pub trace: Vec<TraceStep>,
    /// Number of scans over the process list, including the final no-change scan
    ///
    /// At most `process_count + 1`: up to n scans that finish something, then
    /// the scan that finds nothing left to do.
    pub passes: usize,
}

impl AnalysisResult {
    /// True when every process can complete
    pub fn is_safe(&self) -> bool {
        self.deadlocked.is_empty()
    }

    pub fn is_deadlocked(&self, process: usize) -> bool {
        self.deadlocked.contains(&process)
    }

    pub fn finished_count(&self) -> usize {
        self.safe_sequence.len()
    }

    /// Work vector as it was right before the k-th process in the safe sequence released
    ///
    /// Reconstructed from the trace; `None` if `k` is out of range.
    pub fn work_before_step(&self, k: usize) -> Option<Vec<u64>> {
        if k >= self.safe_sequence.len() {
            return None;
        }
        let mut current = None;
        let mut seen = 0;
        for step in &self.trace {
            match step {
                TraceStep::Started { available } => current = Some(available.clone()),
                TraceStep::WorkUpdated { work, .. } => {
                    if seen == k {
                        return current;
                    }
                    seen += 1;
                    current = Some(work.clone());
                }
                _ => {}
            }
        }
        None
    }
}
