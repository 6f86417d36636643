//! Incremental running-sum reducer.
//!
//! ## Purpose
//!
//! This module provides a rolling sum that updates the previous window's
//! total by adding the entering element and subtracting the leaving one,
//! so each step costs two additions regardless of window size.
//!
//! ## Design notes
//!
//! * **Rounding**: Errors accumulate across steps, so results agree with the
//!   other reducers only within floating-point tolerance.
//! * **Non-finite values**: A window is re-summed from its view whenever the
//!   running total or the entering element is non-finite, so NaN and infinities
//!   only affect the windows that contain them.
//!
//! ## Invariants
//!
//! * Input shape has already been validated by the engine.
//! * Output length is `len - window_size + 1`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::strided::reduce_view;
use crate::math::sum::accumulate;
use crate::primitives::sequence::Sequence;
use crate::primitives::window::{WindowView, Windows};

/// Rolling sum maintained incrementally from one window to the next.
pub fn rolling_sum_running<T: Float>(seq: Sequence<'_, T>, window_size: usize) -> Vec<T> {
    let count = Windows::<T>::count_for(seq.len(), window_size);
    let mut out = Vec::with_capacity(count);
    if count == 0 {
        return out;
    }

    let mut sum = accumulate(seq.iter().take(window_size));
    out.push(sum);

    let leaving = seq.iter();
    let entering = seq.iter().skip(window_size);
    for (start, (old, new)) in (1..count).zip(leaving.zip(entering)) {
        sum = if sum.is_finite() && new.is_finite() {
            sum + new - old
        } else {
            reduce_view(&WindowView::new(seq, start, window_size))
        };
        out.push(sum);
    }

    out
}
