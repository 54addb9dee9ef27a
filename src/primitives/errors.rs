//! Error types for smoothing configuration and execution.
//!
//! ## Purpose
//!
//! This module defines [`SmoothError`], the single error enum returned by
//! every fallible operation in the crate. Errors here are configuration
//! errors: they are raised synchronously at build time, before any
//! smoothing work begins, and are never silently corrected.
//!
//! ## Design notes
//!
//! * An unsupported `(window_size, order)` pair is deliberately NOT an
//!   error. That case degrades to a uniform-average kernel and is reported
//!   through [`KernelSource`](crate::math::kernel::KernelSource) plus a
//!   logged warning instead.
//! * Variants carry the offending values so messages are actionable.
//!
//! ## Visibility
//!
//! [`SmoothError`] is part of the public API and is re-exported from the
//! crate root.

use thiserror::Error;

/// Configuration errors for smoothing operations.
///
/// All variants represent caller contract violations detected before any
/// output is produced. Recoverable conditions (missing precomputed kernel,
/// empty input) are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SmoothError {
    /// The window size must be odd so the kernel has a center tap.
    #[error("window size must be odd, got {0}")]
    EvenWindowSize(usize),

    /// The window size must cover at least one sample.
    #[error("window size must be at least 1")]
    ZeroWindowSize,

    /// The window size exceeds the supported maximum.
    #[error("window size {got} exceeds the supported maximum {max}")]
    WindowSizeTooLarge {
        /// Requested window size.
        got: usize,
        /// Largest supported window size.
        max: usize,
    },

    /// A builder parameter was set more than once.
    #[error("parameter '{parameter}' was set multiple times")]
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}
