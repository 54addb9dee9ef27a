//! High-level API for fixed-window smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! the symmetric Savitzky-Golay filter and a small constructor for the
//! causal trailing mean. Configuration is validated when a processor is
//! built, so every processor in hand is known-good.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (window 5,
//!   quadratic order), matching the constants every observed caller uses.
//! * **Validated**: Window parameters are checked during `build()`;
//!   smoothing itself cannot fail.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Distinct variants**: [`SavGol`] (symmetric, edge-replicating) and
//!   [`TrailingMean`] (causal, shrinking start window) are separate types
//!   with intentionally different edge behavior. Downstream consumers rely
//!   on that difference, so the two are never unified.
//!
//! ## Configuration Flow
//!
//! 1. Create a [`SavGolBuilder`] via `SavGol::builder()`.
//! 2. Chain configuration methods (`.window_size()`, `.order()`).
//! 3. Call `.build()` to validate and obtain a [`SavGol`] processor.
//! 4. Call `.smooth(&values)` as many times as needed; the processor is
//!    immutable and reusable across series.
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered
//! stable.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::marker::PhantomData;
use core::result;
use num_traits::Float;

use crate::engine::executor::{convolve_clamped, trailing_mean};
use crate::engine::validator::Validator;
use crate::math::kernel::{Kernel, KernelSource};
use crate::primitives::errors::SmoothError;

/// Result type alias for smoothing operations.
pub type Result<T> = result::Result<T, SmoothError>;

/// Default symmetric window size.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Default polynomial order (quadratic).
pub const DEFAULT_ORDER: usize = 2;

// ============================================================================
// Savitzky-Golay Builder
// ============================================================================

/// Fluent builder for configuring a [`SavGol`] filter.
#[derive(Debug, Clone)]
pub struct SavGolBuilder<T> {
    /// Symmetric window size (odd).
    pub window_size: Option<usize>,

    /// Polynomial order used to select a precomputed coefficient set.
    pub order: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for SavGolBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SavGolBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window_size: None,
            order: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the symmetric window size (must be odd and positive).
    pub fn window_size(mut self, window_size: usize) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(window_size);
        self
    }

    /// Set the polynomial order used to select a coefficient set.
    pub fn order(mut self, order: usize) -> Self {
        if self.order.is_some() {
            self.duplicate_param = Some("order");
        }
        self.order = Some(order);
        self
    }

    /// Validate the configuration and build the filter.
    ///
    /// Window-size violations fail here, before any smoothing runs. A
    /// `(window_size, order)` pair without a precomputed coefficient set is
    /// not an error: the filter degrades to a uniform-average kernel and
    /// reports it via [`SavGol::kernel_source`] and a logged warning.
    pub fn build(self) -> Result<SavGol<T>> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let window_size = self.window_size.unwrap_or(DEFAULT_WINDOW_SIZE);
        let order = self.order.unwrap_or(DEFAULT_ORDER);

        Validator::validate_window_size(window_size)?;

        Ok(SavGol {
            kernel: Kernel::resolve(window_size, order),
            window_size,
            order,
        })
    }
}

// ============================================================================
// Savitzky-Golay Processor
// ============================================================================

/// Symmetric fixed-window Savitzky-Golay filter with edge replication.
///
/// Obtained from [`SavGolBuilder::build`]; immutable and reusable across
/// any number of independent series.
#[derive(Debug, Clone)]
pub struct SavGol<T> {
    kernel: Kernel<T>,
    window_size: usize,
    order: usize,
}

impl<T: Float> SavGol<T> {
    /// Start configuring a filter.
    pub fn builder() -> SavGolBuilder<T> {
        SavGolBuilder::new()
    }

    /// Smooth a sample sequence.
    ///
    /// Returns a sequence of the same length; an empty input yields an
    /// empty output. The input is never mutated and identical inputs
    /// produce bit-identical outputs.
    pub fn smooth(&self, values: &[T]) -> Vec<T> {
        convolve_clamped(values, self.kernel.weights())
    }

    /// The configured window size.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The configured polynomial order.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// The resolved kernel.
    #[inline]
    pub fn kernel(&self) -> &Kernel<T> {
        &self.kernel
    }

    /// Provenance of the resolved kernel.
    ///
    /// [`KernelSource::UniformFallback`] marks the degraded path taken when
    /// no precomputed coefficient set matched the configuration.
    #[inline]
    pub fn kernel_source(&self) -> KernelSource {
        self.kernel.source()
    }
}

// ============================================================================
// Trailing Mean Processor
// ============================================================================

/// Causal rolling average whose window shrinks near the sequence start.
///
/// `out[i]` is the mean of `values[max(0, i + 1 - w) ..= i]`; the window
/// never looks ahead of `i`. This is not equivalent to [`SavGol`] with a
/// uniform kernel: the symmetric variant replicates boundary samples while
/// this one shortens the window instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingMean {
    window_size: usize,
}

impl TrailingMean {
    /// Create a trailing mean over the given window size.
    ///
    /// The window must be at least 1; odd sizes are not required since a
    /// causal window has no center tap.
    pub fn new(window_size: usize) -> Result<Self> {
        Validator::validate_trailing_window(window_size)?;
        Ok(Self { window_size })
    }

    /// Smooth a sample sequence.
    pub fn smooth<T: Float>(&self, values: &[T]) -> Vec<T> {
        trailing_mean(values, self.window_size)
    }

    /// The configured window size.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }
}
