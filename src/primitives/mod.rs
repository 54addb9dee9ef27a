//! Layer 1: Primitives
//!
//! Foundational types with no smoothing-specific logic.
//!
//! # Module Organization
//!
//! - **errors**: The [`SmoothError`](errors::SmoothError) configuration
//!   error taxonomy
//! - **lookup**: Nearest-sample binary search over a sorted key axis
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (executor, validator)
//!   ↓
//! Layer 2: Math (kernel)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types shared across the crate.
///
/// Provides:
/// - The `SmoothError` enum for configuration violations
/// - Stable, value-carrying error messages
pub mod errors;

/// Nearest-sample lookup utilities.
///
/// Provides:
/// - Lower-bound binary search with closest-neighbor correction
/// - Index clamping for out-of-range targets
pub mod lookup;
