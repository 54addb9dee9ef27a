//! Layer 2: Math
//!
//! Pure mathematical building blocks with no execution logic.
//!
//! # Module Organization
//!
//! - **kernel**: Precomputed Savitzky-Golay coefficient sets, the
//!   uniform-average fallback, and kernel provenance
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (executor, validator)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (errors, lookup)
//! ```

/// Convolution kernels and coefficient tables.
///
/// Provides:
/// - The `Kernel` weight vector type
/// - Precomputed quadratic Savitzky-Golay tables (widths 5, 7, 9)
/// - Uniform-average fallback with observable provenance
pub mod kernel;
