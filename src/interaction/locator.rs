use std::sync::Arc;

use crate::core::PlottedPoint;

/// Index of the column closest to `x`.
///
/// `columns` must be sorted ascending. Queries left of the first column clamp
/// to it, queries right of the last clamp to the last one. Ties go to the
/// lower index, including runs of equal column positions. `None` only for an
/// empty slice. O(log n), no allocation.
#[must_use]
pub fn nearest_column(columns: &[f64], x: f64) -> Option<usize> {
    let last = columns.len().checked_sub(1)?;

    let index = if x <= columns[0] {
        0
    } else if x >= columns[last] {
        last
    } else {
        let (mut left, mut right) = (0, last);
        while right - left > 1 {
            let mid = (left + right) >> 1;
            if columns[mid] <= x {
                left = mid;
            } else {
                right = mid;
            }
        }
        if x - columns[left] <= columns[right] - x {
            left
        } else {
            right
        }
    };

    Some(first_of_run(columns, index))
}

fn debug_assert_sorted(columns: &[f64]) {
    debug_assert!(
        columns.windows(2).all(|pair| pair[0] <= pair[1]),
        "column positions must be sorted"
    );
}

fn first_of_run(columns: &[f64], mut index: usize) -> usize {
    while index > 0 && columns[index - 1] == columns[index] {
        index -= 1;
    }
    index
}

/// Immutable column positions published alongside one assembly result.
///
/// Cloning is a reference-count bump, so a host can hand the snapshot to a
/// high-frequency gesture context and swap it wholesale on recompute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSnapshot {
    columns: Arc<[f64]>,
}

impl ColumnSnapshot {
    #[must_use]
    pub fn new(columns: Vec<f64>) -> Self {
        debug_assert_sorted(&columns);
        Self {
            columns: columns.into(),
        }
    }

    #[must_use]
    pub fn from_points(points: &[PlottedPoint]) -> Self {
        let columns: Arc<[f64]> = points.iter().map(|point| point.x).collect();
        debug_assert_sorted(&columns);
        Self { columns }
    }

    #[must_use]
    pub fn nearest(&self, x: f64) -> Option<usize> {
        nearest_column(&self.columns, x)
    }

    #[must_use]
    pub fn x_at(&self, index: usize) -> Option<f64> {
        self.columns.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
