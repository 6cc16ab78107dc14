/// Work/Finish safety analyzer
///
/// Classifies every process of a snapshot as completable or deadlocked by
/// simulating resource release until nothing changes.
///
/// ## Algorithm
/// 1. `work := available`, `finished[i] := false`
/// 2. Scan processes in index order. Any unfinished process whose whole
///    request row fits in `work` finishes: `work += allocation[i]`, it is
///    appended to the safe sequence.
/// 3. Repeat the scan while the previous one finished at least one process.
/// 4. Whatever is still unfinished is deadlocked.
///
/// A process skipped early in a scan may become finishable after a later
/// process releases, which is why a single linear scan is not enough.
/// Scan order only picks among valid safe sequences; it never changes the
/// deadlocked set.
///
/// ## Performance
/// - Time: O(n² · m), at most n productive scans plus one terminating scan,
///   so `AnalysisResult::passes` is bounded by n + 1 (not n)
/// - Space: O(n · m) for the normalized copy of the input
use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use super::error::{AnalyzerError, Result};
use crate::features::safety_analysis::domain::{units, AnalysisResult, Snapshot, TraceStep};
use crate::features::safety_analysis::ports::SafetyAnalyzerPort;

/// Run the safety analysis on `snapshot`
///
/// Fails with [`AnalyzerError::InvalidDimensions`] when a declared count is
/// zero or any matrix row, the row count, or `available` disagrees with the
/// declared dimensions. Negative cells are read as zero.
///
/// # Examples
///
/// ```rust
/// use deadlock_detector::{analyze, Snapshot};
///
/// let snapshot = Snapshot::new(
///     vec![vec![0, 1, 0], vec![2, 0, 0], vec![3, 0, 3]],
///     vec![vec![0, 0, 0], vec![2, 1, 1], vec![0, 0, 0]],
///     vec![0, 0, 1],
/// );
/// let result = analyze(&snapshot).unwrap();
/// assert!(result.is_safe());
/// assert_eq!(result.safe_sequence, vec![0, 2, 1]);
/// ```
pub fn analyze(snapshot: &Snapshot) -> Result<AnalysisResult> {
    validate_dimensions(snapshot)?;

    let n = snapshot.process_count;
    let mut clamped = 0usize;
    let allocation = normalize_matrix(&snapshot.allocation, &mut clamped);
    let request = normalize_matrix(&snapshot.request, &mut clamped);
    let available = normalize_row(&snapshot.available, &mut clamped);
    if clamped > 0 {
        warn!("{} negative cell(s) treated as zero", clamped);
    }

    let mut work = available.clone();
    let mut finished = vec![false; n];
    let mut safe_sequence = Vec::with_capacity(n);
    let mut trace = vec![TraceStep::Started { available }];
    let mut passes = 0;

    loop {
        passes += 1;
        let mut changed = false;

        for i in 0..n {
            if finished[i] || !can_finish(&request[i], &work) {
                continue;
            }

            trace.push(TraceStep::CanFinish { process: i });
            release(&mut work, &allocation[i]);
            finished[i] = true;
            safe_sequence.push(i);
            trace.push(TraceStep::WorkUpdated {
                process: i,
                work: work.clone(),
            });
            debug!("P{} finished in pass {}, work = {:?}", i, passes, work);
            changed = true;
        }

        if !changed {
            break;
        }
    }

    let deadlocked: BTreeSet<usize> = (0..n).filter(|&i| !finished[i]).collect();
    trace.push(TraceStep::Completed {
        passes,
        deadlocked: deadlocked.len(),
    });

    info!(
        "safety analysis complete: processes={} resources={} finished={} deadlocked={} passes={}",
        n,
        snapshot.resource_count,
        safe_sequence.len(),
        deadlocked.len(),
        passes
    );

    Ok(AnalysisResult {
        work,
        finished,
        safe_sequence,
        deadlocked,
        trace,
        passes,
    })
}

/// Check declared dimensions against the actual matrix and vector shapes
pub fn validate_dimensions(snapshot: &Snapshot) -> Result<()> {
    let n = snapshot.process_count;
    let m = snapshot.resource_count;

    if n == 0 {
        return Err(AnalyzerError::empty_dimension("process count"));
    }
    if m == 0 {
        return Err(AnalyzerError::empty_dimension("resource count"));
    }

    for (name, matrix) in [
        ("allocation", &snapshot.allocation),
        ("request", &snapshot.request),
    ] {
        if matrix.len() != n {
            return Err(AnalyzerError::mismatch(
                format!("{} matrix", name),
                n,
                matrix.len(),
            ));
        }
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != m {
                return Err(AnalyzerError::mismatch(
                    format!("{} row {}", name, i),
                    m,
                    row.len(),
                ));
            }
        }
    }

    if snapshot.available.len() != m {
        return Err(AnalyzerError::mismatch(
            "available vector",
            m,
            snapshot.available.len(),
        ));
    }

    Ok(())
}

/// `request[j] <= work[j]` for every resource j
fn can_finish(request: &[u64], work: &[u64]) -> bool {
    request.iter().zip(work).all(|(need, have)| need <= have)
}

/// `work[j] += allocation[j]` for every resource j
fn release(work: &mut [u64], allocation: &[u64]) {
    for (pool, held) in work.iter_mut().zip(allocation) {
        *pool = pool.saturating_add(*held);
    }
}

fn normalize_matrix(matrix: &[Vec<i64>], clamped: &mut usize) -> Vec<Vec<u64>> {
    matrix.iter().map(|row| normalize_row(row, clamped)).collect()
}

fn normalize_row(row: &[i64], clamped: &mut usize) -> Vec<u64> {
    row.iter()
        .map(|&v| {
            if v < 0 {
                *clamped += 1;
            }
            units(v)
        })
        .collect()
}

// ============================================================================
// Port implementation
// ============================================================================

/// Stateless analyzer handle for code that wants a `SafetyAnalyzerPort`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkFinishAnalyzer;

impl WorkFinishAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl SafetyAnalyzerPort for WorkFinishAnalyzer {
    fn analyze(&self, snapshot: &Snapshot) -> Result<AnalysisResult> {
        analyze(snapshot)
    }

    fn name(&self) -> &'static str {
        "work-finish"
    }
}

// ============================================================================
// Tests
// ============================================================================
