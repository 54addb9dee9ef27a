//! Convolution kernels for fixed-window smoothing.
//!
//! ## Purpose
//!
//! This module defines [`Kernel`], the immutable weight vector applied
//! across a sliding window, and resolves kernels from a fixed table of
//! precomputed Savitzky-Golay coefficient sets.
//!
//! ## Design notes
//!
//! * Coefficients are stored as integer tap/divisor pairs and converted to
//!   the caller's float type on resolution, so every supported kernel sums
//!   to exactly 1 in rational arithmetic.
//! * Coefficients are looked up, never computed: the table is the complete
//!   set of supported `(window_size, order)` pairs. A least-squares
//!   polynomial fit would generalize this but is a separable enhancement.
//! * An unmatched pair degrades to a uniform-average kernel of the
//!   requested width. The degradation is observable two ways: a
//!   `log::warn!` diagnostic and [`KernelSource::UniformFallback`] recorded
//!   on the kernel itself.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Symmetric taps
//!
//! A kernel of odd length `w` has half-width `(w - 1) / 2` and is indexed
//! symmetrically around its center tap. The weights of every supported
//! kernel sum to 1, so smoothing preserves constant signals.
//!
//! ### Fallback provenance
//!
//! Callers that must distinguish an ideal Savitzky-Golay fit from the
//! degraded uniform average inspect [`Kernel::source`] rather than parsing
//! log output.
//!
//! ## Invariants
//!
//! * `weights.len()` is odd and equals the requested window size.
//! * Weights sum to 1 within floating-point tolerance.
//!
//! ## Non-goals
//!
//! * This module does not validate window sizes (handled by `validator`).
//! * This module does not apply kernels to data (handled by `executor`).
//!
//! ## Visibility
//!
//! [`Kernel`] and [`KernelSource`] are part of the public API.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::warn;
use num_traits::Float;

// ============================================================================
// Precomputed Coefficient Tables
// ============================================================================

/// Quadratic Savitzky-Golay taps for window size 5, divisor 35.
const QUADRATIC_5: [i32; 5] = [-3, 12, 17, 12, -3];

/// Quadratic Savitzky-Golay taps for window size 7, divisor 21.
const QUADRATIC_7: [i32; 7] = [-2, 3, 6, 7, 6, 3, -2];

/// Quadratic Savitzky-Golay taps for window size 9, divisor 231.
const QUADRATIC_9: [i32; 9] = [-21, 14, 39, 54, 59, 54, 39, 14, -21];

// ============================================================================
// Kernel Types
// ============================================================================

/// Provenance of a resolved kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelSource {
    /// The requested `(window_size, order)` pair matched a precomputed
    /// Savitzky-Golay coefficient set.
    Precomputed,

    /// No precomputed entry matched; a uniform-average kernel of the
    /// requested width was substituted.
    UniformFallback,
}

/// An odd-length, sum-to-one convolution kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel<T> {
    /// Tap weights, center tap at `weights[half_width]`.
    weights: Vec<T>,

    /// How the kernel was obtained.
    source: KernelSource,
}

impl<T: Float> Kernel<T> {
    /// Resolve a kernel for a `(window_size, order)` pair.
    ///
    /// Falls back to a uniform-average kernel, with a logged warning, when
    /// the pair has no precomputed entry. The caller is expected to have
    /// validated `window_size` (odd, positive) beforehand.
    pub fn resolve(window_size: usize, order: usize) -> Self {
        debug_assert!(
            window_size % 2 == 1,
            "resolve: window_size must be odd and validated upstream"
        );

        match (window_size, order) {
            (5, 2) => Self::from_taps(&QUADRATIC_5, 35),
            (7, 2) => Self::from_taps(&QUADRATIC_7, 21),
            (9, 2) => Self::from_taps(&QUADRATIC_9, 231),
            _ => {
                warn!(
                    "no precomputed Savitzky-Golay coefficients for window={}, order={}; \
                     falling back to a uniform average",
                    window_size, order
                );
                Self::uniform(window_size)
            }
        }
    }

    /// Build a uniform-average kernel with all weights `1 / window_size`.
    pub fn uniform(window_size: usize) -> Self {
        let w = T::one() / T::from(window_size).unwrap();
        Self {
            weights: vec![w; window_size],
            source: KernelSource::UniformFallback,
        }
    }

    /// Convert an integer tap/divisor table into float weights.
    fn from_taps(taps: &[i32], divisor: i32) -> Self {
        let d = T::from(divisor).unwrap();
        Self {
            weights: taps.iter().map(|&c| T::from(c).unwrap() / d).collect(),
            source: KernelSource::Precomputed,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Tap weights, ordered left to right across the window.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Number of taps (the window size).
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the kernel has no taps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Half-width `(len - 1) / 2` of the symmetric window.
    #[inline]
    pub fn half_width(&self) -> usize {
        self.weights.len() / 2
    }

    /// Provenance of this kernel.
    #[inline]
    pub fn source(&self) -> KernelSource {
        self.source
    }

    /// Returns `true` if this kernel is the degraded uniform fallback.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.source == KernelSource::UniformFallback
    }
}
