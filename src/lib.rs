//! Fixed-window signal smoothing for one-dimensional numeric series.
//!
//! ## Purpose
//!
//! This crate consolidates the smoothing logic that per-chart rendering
//! code tends to re-implement ad hoc: a symmetric Savitzky-Golay filter
//! with precomputed coefficient tables and edge replication, and a causal
//! trailing mean whose window shrinks near the start of the sequence. Both
//! are pure, stateless transforms: same-length output, deterministic,
//! input never mutated.
//!
//! ## Key concepts
//!
//! ### Two distinct edge behaviors
//!
//! * [`SavGol`] clamps out-of-range window reads to the nearest boundary
//!   sample (edge replication), never zero-padding and never wrapping.
//! * [`TrailingMean`] only looks backward and shortens its window at the
//!   start instead of clamping.
//!
//! Downstream consumers rely on the difference, so the variants are
//! deliberately separate types.
//!
//! ### Degraded kernel path
//!
//! A `(window_size, order)` pair without a precomputed coefficient set
//! falls back to a uniform average of the requested width. The fallback is
//! a recoverable condition, not an error: a visually smoothed
//! approximation beats refusing to produce output. It is observable via
//! [`KernelSource::UniformFallback`] and a `log::warn!` diagnostic.
//!
//! ## Example
//!
//! ```rust
//! use savgol::SavGol;
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0];
//! let filter = SavGol::<f64>::builder()
//!     .window_size(5)
//!     .order(2)
//!     .build()
//!     .expect("odd positive window");
//! let smoothed = filter.smooth(&series);
//! assert_eq!(smoothed.len(), series.len());
//! ```
//!
//! ## Concurrency
//!
//! Every transform is synchronous and touches no shared state; independent
//! calls (for example smoothing several metric series of the same dataset)
//! may run in parallel from the host without coordination.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use num_traits::Float;

pub mod api;
pub mod engine;
pub mod math;
pub mod primitives;

pub use api::{Result, SavGol, SavGolBuilder, TrailingMean, DEFAULT_ORDER, DEFAULT_WINDOW_SIZE};
pub use math::kernel::{Kernel, KernelSource};
pub use primitives::errors::SmoothError;
pub use primitives::lookup::nearest_index;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::api::{Result, SavGol, SavGolBuilder, TrailingMean};
    pub use crate::math::kernel::{Kernel, KernelSource};
    pub use crate::primitives::errors::SmoothError;
    pub use crate::primitives::lookup::nearest_index;
}

/// Smooth a series with the default width-5 quadratic filter.
///
/// Convenience wrapper over [`SavGol`] with the defaults every observed
/// caller uses; the default configuration is statically valid, so this
/// cannot fail.
pub fn smooth<T: Float>(values: &[T]) -> Vec<T> {
    let kernel = Kernel::resolve(DEFAULT_WINDOW_SIZE, DEFAULT_ORDER);
    engine::executor::convolve_clamped(values, kernel.weights())
}

/// Smooth a series with an explicit window size and polynomial order.
pub fn smooth_with<T: Float>(values: &[T], window_size: usize, order: usize) -> Result<Vec<T>> {
    let filter = SavGol::builder().window_size(window_size).order(order).build()?;
    Ok(filter.smooth(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convenience_smooth_preserves_length() {
        let values = [1.0, 4.0, 2.0, 8.0, 5.0, 7.0];
        assert_eq!(smooth(&values).len(), values.len());
    }

    #[test]
    fn convenience_smooth_with_propagates_config_errors() {
        assert!(smooth_with(&[1.0, 2.0], 4, 2).is_err());
        assert!(smooth_with(&[1.0, 2.0], 5, 2).is_ok());
    }
}
