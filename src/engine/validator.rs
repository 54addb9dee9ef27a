//! Input validation for smoothing configuration.
//!
//! ## Purpose
//!
//! This module provides the validation functions applied to smoother
//! configuration before any computation begins. Configuration violations
//! are caller contract errors and fail fast with a descriptive
//! [`SmoothError`]; they are never silently corrected.
//!
//! ## Design notes
//!
//! * All validation is performed upfront at build time.
//! * Validation is fail-fast: returns on the first error encountered.
//! * Error variants include the offending values for debugging.
//! * Checks are ordered from cheap to expensive.
//!
//! ## Validated parameters
//!
//! * **Symmetric window size**: Odd, at least 1, at most [`MAX_WINDOW_SIZE`]
//! * **Trailing window size**: At least 1 (odd not required; the causal
//!   window has no center tap)
//! * **Builder hygiene**: No parameter set more than once
//!
//! ## Key concepts
//!
//! ### Hard versus soft failures
//!
//! An invalid window size is a hard failure because no sensible output
//! exists for it. A `(window_size, order)` pair without a precomputed
//! kernel is a soft condition handled in the kernel layer: it degrades to
//! a uniform average and is reported through kernel provenance, not
//! through this module.
//!
//! ### Input data is not validated
//!
//! The smoothing transforms accept any finite-length sample sequence,
//! including empty and single-element ones, so there is nothing to reject
//! at the data level.
//!
//! ## Non-goals
//!
//! * This module does not resolve kernels or smooth data.
//! * This module does not provide automatic correction of invalid inputs.
//!
//! ## Visibility
//!
//! This module is an internal implementation detail used by the builders.

use crate::primitives::errors::SmoothError;

/// Largest supported window size, applied to both smoothing variants.
pub const MAX_WINDOW_SIZE: usize = 999;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoother configuration.
///
/// Provides static methods returning `Result<(), SmoothError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a symmetric convolution window size.
    pub fn validate_window_size(window_size: usize) -> Result<(), SmoothError> {
        if window_size == 0 {
            return Err(SmoothError::ZeroWindowSize);
        }
        if window_size % 2 == 0 {
            return Err(SmoothError::EvenWindowSize(window_size));
        }
        if window_size > MAX_WINDOW_SIZE {
            return Err(SmoothError::WindowSizeTooLarge {
                got: window_size,
                max: MAX_WINDOW_SIZE,
            });
        }
        Ok(())
    }

    /// Validate a trailing (causal) window size.
    pub fn validate_trailing_window(window_size: usize) -> Result<(), SmoothError> {
        if window_size == 0 {
            return Err(SmoothError::ZeroWindowSize);
        }
        if window_size > MAX_WINDOW_SIZE {
            return Err(SmoothError::WindowSizeTooLarge {
                got: window_size,
                max: MAX_WINDOW_SIZE,
            });
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SmoothError> {
        if let Some(parameter) = duplicate_param {
            return Err(SmoothError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
