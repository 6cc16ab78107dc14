//! Property-based tests for the safety analyzer
//!
//! Invariants that should hold for ALL snapshots:
//! - Determinism: repeated runs agree
//! - Order independence: permuting process rows permutes the deadlocked set
//! - Monotonicity + conservation: replaying the safe sequence reproduces `work`
//! - No deadlock without cause: every deadlocked process is short somewhere
//! - Normalization: any form input with positive dimensions analyzes cleanly
//! - Extreme units: reports over cells up to i64::MAX build and render

mod common;

use std::collections::BTreeSet;

use common::*;
use deadlock_detector::config::OutputConfig;
use deadlock_detector::features::input::parse_lenient;
use deadlock_detector::features::report::render::{render_json, render_text};
use deadlock_detector::{analyze, DeadlockDetectionUseCase, FormInput, Snapshot};
use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

// ============================================================================
// Strategies
// ============================================================================

/// Snapshot with 1..=8 processes, 1..=5 resources, cells in -1..=4
fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    (1usize..=8, 1usize..=5).prop_flat_map(|(n, m)| {
        let cell = -1i64..=4;
        (
            prop::collection::vec(prop::collection::vec(cell.clone(), m), n),
            prop::collection::vec(prop::collection::vec(cell.clone(), m), n),
            prop::collection::vec(cell, m),
        )
            .prop_map(move |(allocation, request, available)| {
                Snapshot::with_dimensions(n, m, allocation, request, available)
            })
    })
}

/// Snapshot with cells anywhere in 0..=i64::MAX, biased toward the top
fn huge_snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    (1usize..=5, 1usize..=4).prop_flat_map(|(n, m)| {
        let cell = prop_oneof![
            0i64..=4,
            (i64::MAX - 4)..=i64::MAX,
            0i64..=i64::MAX,
        ];
        (
            prop::collection::vec(prop::collection::vec(cell.clone(), m), n),
            prop::collection::vec(prop::collection::vec(cell.clone(), m), n),
            prop::collection::vec(cell, m),
        )
            .prop_map(|(allocation, request, available)| Snapshot::new(allocation, request, available))
    })
}

/// Snapshot paired with a permutation of its process indices
fn permuted_strategy() -> impl Strategy<Value = (Snapshot, Vec<usize>)> {
    snapshot_strategy().prop_flat_map(|s| {
        let order: Vec<usize> = (0..s.process_count).collect();
        (Just(s), Just(order).prop_shuffle())
    })
}

// ============================================================================
// Proptest
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_analysis_is_deterministic(s in snapshot_strategy()) {
        let first = analyze(&s).unwrap();
        let second = analyze(&s).unwrap();

        prop_assert_eq!(&first.finished, &second.finished);
        prop_assert_eq!(&first.safe_sequence, &second.safe_sequence);
        prop_assert_eq!(&first.deadlocked, &second.deadlocked);
        prop_assert_eq!(&first.work, &second.work);
    }

    #[test]
    fn prop_classification_ignores_scan_order((s, order) in permuted_strategy()) {
        let original = analyze(&s).unwrap();
        let permuted = analyze(&permute_processes(&s, &order)).unwrap();

        // Row k of the permuted snapshot is process order[k] of the original
        let mapped: BTreeSet<usize> = permuted.deadlocked.iter().map(|&k| order[k]).collect();
        prop_assert_eq!(&mapped, &original.deadlocked);
        prop_assert_eq!(&permuted.work, &original.work);
    }

    #[test]
    fn prop_safe_sequence_replays_to_final_work(s in snapshot_strategy()) {
        let result = analyze(&s).unwrap();

        // Panics inside on an invalid step, a shrinking pool, or a trace mismatch
        let replayed = replay_safe_sequence(&s, &result);
        prop_assert_eq!(&replayed, &result.work);
    }

    #[test]
    fn prop_deadlocked_processes_are_blocked(s in snapshot_strategy()) {
        let result = analyze(&s).unwrap();
        assert_deadlock_has_cause(&s, &result);

        let finished: BTreeSet<usize> = result.safe_sequence.iter().copied().collect();
        prop_assert_eq!(finished.len(), result.safe_sequence.len());
        prop_assert!(finished.is_disjoint(&result.deadlocked));
        prop_assert_eq!(finished.len() + result.deadlocked.len(), s.process_count);
        prop_assert!(result.passes <= s.process_count + 1);
    }

    #[test]
    fn prop_input_is_never_mutated(s in snapshot_strategy()) {
        let before = s.clone();
        let _ = analyze(&s).unwrap();
        prop_assert_eq!(s, before);
    }

    #[test]
    fn prop_reports_survive_extreme_units(s in huge_snapshot_strategy()) {
        let report = DeadlockDetectionUseCase::new().detect(&s).unwrap();

        for (i, load) in report.loads.iter().enumerate() {
            let largest_cell = s.allocation[i].iter().chain(&s.request[i]).copied().max().unwrap_or(0);
            prop_assert!(load.load >= largest_cell as u64);
        }

        let text = render_text(&report, &OutputConfig::default());
        prop_assert!(text.contains("Relative load"));
        prop_assert!(render_json(&report).is_ok());
    }

    #[test]
    fn prop_any_sized_form_normalizes(
        n in 1usize..=6,
        m in 1usize..=6,
        cells in prop::collection::vec("[ 0-9a-z.,-]{0,4}", 0..40),
    ) {
        let rows: Vec<Vec<String>> = cells.chunks(3).map(|c| c.to_vec()).collect();
        let form = FormInput {
            process_count: n.to_string(),
            resource_count: m.to_string(),
            allocation: rows.clone(),
            request: rows.iter().rev().cloned().collect(),
            available: cells.clone(),
        };

        let snapshot = form.to_snapshot().unwrap();
        prop_assert!(analyze(&snapshot).is_ok());
    }
}

// ============================================================================
// QuickCheck Tests
// ============================================================================

#[quickcheck]
fn qc_parse_lenient_roundtrips_integers(value: i64) -> TestResult {
    if value == i64::MIN {
        // Magnitude saturates at i64::MAX
        return TestResult::discard();
    }
    TestResult::from_bool(parse_lenient(&value.to_string()) == value)
}

#[quickcheck]
fn qc_parse_lenient_ignores_suffix(value: u32, suffix: String) -> TestResult {
    if suffix.starts_with(|c: char| c.is_ascii_digit()) {
        return TestResult::discard();
    }
    let raw = format!("{}{}", value, suffix);
    TestResult::from_bool(parse_lenient(&raw) == i64::from(value))
}

#[quickcheck]
fn qc_zero_requests_are_always_safe(allocation: Vec<u8>) -> TestResult {
    if allocation.is_empty() {
        return TestResult::discard();
    }
    let n = allocation.len();
    let s = Snapshot::new(
        allocation.iter().map(|&a| vec![i64::from(a)]).collect(),
        vec![vec![0]; n],
        vec![0],
    );

    let result = analyze(&s).unwrap();
    let expected: u64 = allocation.iter().map(|&a| u64::from(a)).sum();
    TestResult::from_bool(
        result.is_safe() && result.safe_sequence == (0..n).collect::<Vec<_>>() && result.work == vec![expected],
    )
}
