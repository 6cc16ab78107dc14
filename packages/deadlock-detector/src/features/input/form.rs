use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::InputError;
use super::lenient::{parse_lenient, split_cells, split_rows};
use crate::config::MAX_DIMENSION;
use crate::features::safety_analysis::Snapshot;

/// Raw, user-editable snapshot input
///
/// Every cell is kept as typed. Nothing is validated until
/// [`FormInput::to_snapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub process_count: String,
    pub resource_count: String,
    pub allocation: Vec<Vec<String>>,
    pub request: Vec<Vec<String>>,
    pub available: Vec<String>,
}

impl FormInput {
    /// An n×m form with every cell set to "0"
    pub fn blank(process_count: usize, resource_count: usize) -> Self {
        let row = vec!["0".to_string(); resource_count];
        Self {
            process_count: process_count.to_string(),
            resource_count: resource_count.to_string(),
            allocation: vec![row.clone(); process_count],
            request: vec![row.clone(); process_count],
            available: row,
        }
    }

    /// Fill a form from an existing snapshot (loading a scenario)
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let to_cells = |row: &Vec<i64>| row.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        Self {
            process_count: snapshot.process_count.to_string(),
            resource_count: snapshot.resource_count.to_string(),
            allocation: snapshot.allocation.iter().map(to_cells).collect(),
            request: snapshot.request.iter().map(to_cells).collect(),
            available: to_cells(&snapshot.available),
        }
    }

    /// Build a form from free text: counts plus `;`/newline-separated matrix rows
    pub fn from_text(
        process_count: &str,
        resource_count: &str,
        allocation: &str,
        request: &str,
        available: &str,
    ) -> Self {
        Self {
            process_count: process_count.to_string(),
            resource_count: resource_count.to_string(),
            allocation: split_rows(allocation),
            request: split_rows(request),
            available: split_cells(available),
        }
    }

    /// Parsed (n, m); both must be in `1..=MAX_DIMENSION`
    pub fn dimensions(&self) -> Result<(usize, usize), InputError> {
        let n = positive_count("process count", &self.process_count)?;
        let m = positive_count("resource count", &self.resource_count)?;
        Ok((n, m))
    }

    /// Normalize into an n×m snapshot
    ///
    /// Missing cells become 0, cells beyond the declared dimensions are
    /// dropped, and every cell goes through [`parse_lenient`]. The result
    /// always passes the analyzer's dimension check.
    pub fn to_snapshot(&self) -> Result<Snapshot, InputError> {
        let (n, m) = self.dimensions()?;
        let mut padded = 0usize;

        let allocation = normalize_grid(&self.allocation, n, m, &mut padded);
        let request = normalize_grid(&self.request, n, m, &mut padded);
        let available = normalize_cells(&self.available, m, &mut padded);

        if padded > 0 {
            debug!("{} missing cell(s) defaulted to 0", padded);
        }

        Ok(Snapshot::with_dimensions(
            n, m, allocation, request, available,
        ))
    }
}

fn positive_count(field: &str, raw: &str) -> Result<usize, InputError> {
    let value = parse_lenient(raw);
    if value <= 0 {
        return Err(InputError::DimensionsNotSet {
            field: field.to_string(),
            raw: raw.to_string(),
        });
    }
    check_limit(field, value as u64)?;
    Ok(value as usize)
}

fn check_limit(field: &str, value: u64) -> Result<(), InputError> {
    if value > MAX_DIMENSION as u64 {
        return Err(InputError::DimensionTooLarge {
            field: field.to_string(),
            value,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// Refuse snapshots whose declared counts exceed [`MAX_DIMENSION`]
///
/// Snapshot documents skip the form layer, so they are checked here before
/// any per-process work is done.
pub fn ensure_within_limits(snapshot: &Snapshot) -> Result<(), InputError> {
    check_limit("process count", snapshot.process_count as u64)?;
    check_limit("resource count", snapshot.resource_count as u64)
}

fn normalize_grid(grid: &[Vec<String>], rows: usize, cols: usize, padded: &mut usize) -> Vec<Vec<i64>> {
    const EMPTY: &[String] = &[];
    (0..rows)
        .map(|i| {
            let row = grid.get(i).map(Vec::as_slice).unwrap_or(EMPTY);
            normalize_cells(row, cols, padded)
        })
        .collect()
}

fn normalize_cells(cells: &[String], cols: usize, padded: &mut usize) -> Vec<i64> {
    (0..cols)
        .map(|j| match cells.get(j) {
            Some(cell) => parse_lenient(cell),
            None => {
                *padded += 1;
                0
            }
        })
        .collect()
}
