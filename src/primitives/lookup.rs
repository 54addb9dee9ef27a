//! Nearest-sample lookup over a sorted key axis.
//!
//! Consolidates the pointer-snapping scan that renderers need when mapping
//! a continuous coordinate (for example a mouse position converted back to
//! the time axis) onto the closest sample index. The keys are assumed to be
//! sorted ascending; lookup is a binary search for the lower bound followed
//! by a single closest-neighbor correction.

use core::cmp::Ordering;
use num_traits::Float;

/// Find the index of the sample whose key is closest to `target`.
///
/// Uses a lower-bound binary search, then steps back one position when the
/// left neighbor is strictly closer. Equidistant targets resolve to the
/// lower-bound position. Targets outside the key range clamp to the first
/// or last index.
///
/// Returns `None` for an empty slice.
///
/// # Invariants
///
/// * `keys` must be sorted in ascending order; the result is unspecified
///   otherwise.
pub fn nearest_index<T: Float>(keys: &[T], target: T) -> Option<usize> {
    if keys.is_empty() {
        return None;
    }

    let mut idx = keys.partition_point(|&k| {
        matches!(k.partial_cmp(&target), Some(Ordering::Less))
    });

    if idx >= keys.len() {
        return Some(keys.len() - 1);
    }
    if idx > 0 && (target - keys[idx - 1]) < (keys[idx] - target) {
        idx -= 1;
    }

    Some(idx)
}
