#![cfg(feature = "dev")]
//! Property-based tests for the rolling reducers.
//!
//! ## Test Organization
//!
//! 1. **Shape** - Output length, rejection of oversized windows
//! 2. **Agreement** - Naive, strided and `slice::windows` are bit-identical
//! 3. **Running** - Agreement within tolerance

use proptest::prelude::*;

use rolling::internals::api::{rolling_sum, rolling_sum_naive, Method, RollingBuilder};
use rolling::internals::primitives::errors::RollingError;

/// Sequence of at least two finite values plus a valid window for it.
fn sequence_and_window() -> impl Strategy<Value = (Vec<f64>, usize)> {
    prop::collection::vec(-1e6_f64..1e6, 2..200).prop_flat_map(|data| {
        let len = data.len();
        (Just(data), 1..len)
    })
}

/// Reference sum using the standard library window iterator.
fn std_rolling_sum(data: &[f64], w: usize) -> Vec<f64> {
    data.windows(w)
        .map(|win| win.iter().fold(0.0, |acc, &v| acc + v))
        .collect()
}

proptest! {
    // ========================================================================
    // Shape Properties
    // ========================================================================

    /// Output has one value per window start.
    #[test]
    fn prop_output_length((data, w) in sequence_and_window()) {
        let sums = rolling_sum(w, &data).unwrap();
        prop_assert_eq!(sums.len(), data.len() - w + 1);
    }

    /// Windows at least as long as the input are rejected.
    #[test]
    fn prop_oversized_window_rejected(
        data in prop::collection::vec(-1e3_f64..1e3, 1..50),
        extra in 0usize..10,
    ) {
        let w = data.len() + extra;
        let err = rolling_sum(w, &data).unwrap_err();
        prop_assert_eq!(err, RollingError::WindowTooLarge { window_size: w, len: data.len() });
    }

    // ========================================================================
    // Agreement Properties
    // ========================================================================

    /// Naive, strided and std-windows sums are bit-identical.
    #[test]
    fn prop_exact_reducers_agree((data, w) in sequence_and_window()) {
        let strided = rolling_sum(w, &data).unwrap();
        let naive = rolling_sum_naive(w, &data).unwrap();
        let reference = std_rolling_sum(&data, w);

        prop_assert_eq!(&strided, &naive);
        prop_assert_eq!(&strided, &reference);
    }

    /// A stride over the buffer matches reducing a pre-gathered copy.
    #[test]
    fn prop_stride_matches_gathered(
        data in prop::collection::vec(-1e3_f64..1e3, 8..120),
        stride in 1usize..4,
    ) {
        let logical: Vec<f64> = data.iter().copied().step_by(stride).collect();
        prop_assume!(logical.len() >= 2);
        let w = logical.len() / 2;

        let model = RollingBuilder::<f64>::new()
            .window_size(w)
            .stride(stride)
            .build()
            .unwrap();
        let result = model.sum(&data).unwrap();

        prop_assert_eq!(result.input_len, logical.len());
        prop_assert_eq!(result.values, std_rolling_sum(&logical, w));
    }

    /// Repeated calls return identical sums.
    #[test]
    fn prop_idempotent((data, w) in sequence_and_window()) {
        prop_assert_eq!(rolling_sum(w, &data).unwrap(), rolling_sum(w, &data).unwrap());
    }

    // ========================================================================
    // Running Properties
    // ========================================================================

    /// Running totals track the exact sums within a magnitude-scaled tolerance.
    #[test]
    fn prop_running_close_to_exact((data, w) in sequence_and_window()) {
        let model = RollingBuilder::<f64>::new()
            .window_size(w)
            .method(Method::Running)
            .build()
            .unwrap();
        let running = model.sum(&data).unwrap().values;
        let exact = rolling_sum(w, &data).unwrap();

        let scale: f64 = data.iter().map(|v| v.abs()).sum::<f64>().max(1.0);
        for (r, e) in running.iter().zip(&exact) {
            prop_assert!((r - e).abs() <= 1e-9 * scale, "running {} vs exact {}", r, e);
        }
    }
}
