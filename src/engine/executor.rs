//! Execution engine for fixed-window smoothing.
//!
//! ## Purpose
//!
//! This module implements the two smoothing loops: the symmetric clamped
//! convolution used by the Savitzky-Golay filter and the causal trailing
//! mean. Both are pure, single-pass transforms over a sample sequence.
//!
//! ## Design notes
//!
//! * Both transforms run to completion within one call; there is no I/O,
//!   no retained state, and no suspension point.
//! * Output length always equals input length; the input is never mutated.
//! * Independent calls are safe to run in parallel from the host.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Edge replication (symmetric variant)
//!
//! Window reads that fall outside `[0, n)` are clamped to the nearest valid
//! boundary index, so boundary samples are re-read as many times as the
//! window overhangs. The input is never zero-padded and never wrapped;
//! either would bias the edges toward zero or toward the opposite end of
//! the series.
//!
//! ### Shrinking window (causal variant)
//!
//! The trailing mean averages `values[max(0, i+1-w) ..= i]`. Near the start
//! the window simply contains fewer samples; it never reads ahead of `i`.
//! The two edge behaviors are intentionally different and the variants must
//! not be collapsed into one another.
//!
//! ## Invariants
//!
//! * Kernel length is odd and at least 1 (validated upstream).
//! * `out.len() == values.len()` for every input, including empty.
//! * Identical inputs produce bit-identical outputs.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not resolve kernels (handled by `math::kernel`).
//!
//! ## Visibility
//!
//! These functions are internal to the crate; callers go through the API
//! layer processors.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use num_traits::Float;

// ============================================================================
// Symmetric Clamped Convolution
// ============================================================================

/// Apply an odd-length kernel across `values` with edge replication.
///
/// For each output index `i`, accumulates
/// `kernel[j + half] * values[clamp(i + j, 0, n - 1)]` over tap offsets
/// `j` in `[-half, +half]`.
pub fn convolve_clamped<T: Float>(values: &[T], weights: &[T]) -> Vec<T> {
    let n = values.len();
    let half = weights.len() / 2;

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let mut acc = T::zero();
        for (tap, &w) in weights.iter().enumerate() {
            // Tap offset relative to the center, then clamp into range.
            let pos = i + tap;
            let idx = if pos < half {
                0
            } else {
                (pos - half).min(n - 1)
            };
            acc = acc + w * values[idx];
        }
        out.push(acc);
    }

    out
}

// ============================================================================
// Causal Trailing Mean
// ============================================================================

/// Backward-looking rolling average with a shrinking start window.
///
/// `out[i]` is the mean of `values[max(0, i + 1 - window_size) ..= i]`.
pub fn trailing_mean<T: Float>(values: &[T], window_size: usize) -> Vec<T> {
    debug_assert!(window_size >= 1, "trailing_mean: window_size must be >= 1");

    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(window_size);
        let window = &values[start..=i];

        let sum = window.iter().fold(T::zero(), |acc, &v| acc + v);
        out.push(sum / T::from(window.len()).unwrap());
    }

    out
}
