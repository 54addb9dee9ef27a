//! Layer 3: Engine
//!
//! Core execution logic for fixed-window smoothing.
//!
//! This layer applies resolved kernels to sample sequences and enforces the
//! configuration contract before any computation runs.
//!
//! # Module Organization
//!
//! - **executor**: The symmetric clamped convolution and causal
//!   trailing-mean loops
//! - **validator**: Fail-fast configuration validation rules
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math (kernel)
//!   ↓
//! Layer 1: Primitives (errors, lookup)
//! ```

/// Smoothing execution loops.
///
/// Provides:
/// - Edge-replicating symmetric convolution
/// - Backward-looking trailing mean with a shrinking start window
pub mod executor;

/// Validation utilities.
///
/// Provides:
/// - Window-size bound checks for both smoothing variants
/// - Builder duplicate-parameter detection
pub mod validator;
