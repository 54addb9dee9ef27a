//! Property-based tests for the smoothing invariants.
//!
//! Coverage
//! --------
//! - Length preservation across arbitrary finite inputs and window
//!   configurations.
//! - Constant-input reproduction for sum-to-one kernels.
//! - Determinism (bit-identical repeated calls).
//! - Trailing-mean bounds: every output lies within the min/max of the
//!   samples its window actually covers.

use proptest::prelude::*;
use savgol::prelude::*;

/// Odd window sizes across the precomputed and fallback ranges.
fn odd_window() -> impl Strategy<Value = usize> {
    (0usize..=10).prop_map(|k| 2 * k + 1)
}

fn finite_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e6f64..1e6, 0..200)
}

proptest! {
    #[test]
    fn smooth_preserves_length(values in finite_series(), w in odd_window(), o in 0usize..6) {
        let filter = SavGol::<f64>::builder()
            .window_size(w)
            .order(o)
            .build()
            .unwrap();
        prop_assert_eq!(filter.smooth(&values).len(), values.len());
    }

    #[test]
    fn constant_series_is_reproduced(c in -1e3f64..1e3, n in 0usize..100, w in odd_window()) {
        let values = vec![c; n];
        let filter = SavGol::<f64>::builder().window_size(w).order(2).build().unwrap();
        for v in filter.smooth(&values) {
            prop_assert!((v - c).abs() <= 1e-9 * (1.0 + c.abs()));
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical(values in finite_series(), w in odd_window()) {
        let filter = SavGol::<f64>::builder().window_size(w).order(2).build().unwrap();
        let a: Vec<u64> = filter.smooth(&values).iter().map(|v| v.to_bits()).collect();
        let b: Vec<u64> = filter.smooth(&values).iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn trailing_mean_stays_within_window_bounds(
        values in prop::collection::vec(-1e6f64..1e6, 1..200),
        w in 1usize..40,
    ) {
        let mean = TrailingMean::new(w).unwrap();
        let out = mean.smooth(&values);
        prop_assert_eq!(out.len(), values.len());

        for (i, &v) in out.iter().enumerate() {
            let start = (i + 1).saturating_sub(w);
            let window = &values[start..=i];
            let lo = window.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = window.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(v >= lo - 1e-6 && v <= hi + 1e-6);
        }
    }

    #[test]
    fn trailing_mean_length_preserved(values in finite_series(), w in 1usize..40) {
        let mean = TrailingMean::new(w).unwrap();
        prop_assert_eq!(mean.smooth(&values).len(), values.len());
    }

    #[test]
    fn even_windows_always_rejected(k in 1usize..100) {
        let w = 2 * k;
        prop_assert_eq!(
            SavGol::<f64>::builder().window_size(w).build().unwrap_err(),
            SmoothError::EvenWindowSize(w)
        );
    }
}
