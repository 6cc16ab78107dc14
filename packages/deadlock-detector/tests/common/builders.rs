//! Snapshot builders and invariant checks

#![allow(dead_code)]

use deadlock_detector::{AnalysisResult, Snapshot};

/// Snapshot from plain arrays, dimensions inferred
pub fn snapshot(allocation: &[&[i64]], request: &[&[i64]], available: &[i64]) -> Snapshot {
    Snapshot::new(
        allocation.iter().map(|row| row.to_vec()).collect(),
        request.iter().map(|row| row.to_vec()).collect(),
        available.to_vec(),
    )
}

/// Reorder the process rows of `snapshot`: new row k is old row `order[k]`
pub fn permute_processes(snapshot: &Snapshot, order: &[usize]) -> Snapshot {
    Snapshot::with_dimensions(
        snapshot.process_count,
        snapshot.resource_count,
        order.iter().map(|&i| snapshot.allocation[i].clone()).collect(),
        order.iter().map(|&i| snapshot.request[i].clone()).collect(),
        snapshot.available.clone(),
    )
}

/// Replay the safe sequence from `available` and check each step
///
/// Every process must fit in the pool before it releases, and the pool must
/// grow by exactly its allocation. Returns the replayed final pool.
pub fn replay_safe_sequence(snapshot: &Snapshot, result: &AnalysisResult) -> Vec<u64> {
    let clamp = |v: i64| v.max(0) as u64;
    let mut work: Vec<u64> = snapshot.available.iter().map(|&v| clamp(v)).collect();

    for (k, &i) in result.safe_sequence.iter().enumerate() {
        assert_eq!(
            result.work_before_step(k).as_deref(),
            Some(work.as_slice()),
            "work before step {} disagrees with trace",
            k
        );
        for j in 0..snapshot.resource_count {
            assert!(
                clamp(snapshot.request[i][j]) <= work[j],
                "P{} started without enough R{}",
                i,
                j
            );
        }
        let before = work.clone();
        for j in 0..snapshot.resource_count {
            work[j] = work[j].saturating_add(clamp(snapshot.allocation[i][j]));
            assert!(work[j] >= before[j], "work decreased");
        }
    }
    work
}

/// Every deadlocked process must be short of at least one resource at the end
pub fn assert_deadlock_has_cause(snapshot: &Snapshot, result: &AnalysisResult) {
    for &i in &result.deadlocked {
        let blocked = (0..snapshot.resource_count)
            .any(|j| snapshot.request[i][j].max(0) as u64 > result.work[j]);
        assert!(blocked, "P{} deadlocked but fits in final work", i);
    }
}
