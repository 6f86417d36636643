//! Copy-per-window baseline reducer.
//!
//! ## Purpose
//!
//! This module provides the performance-naive rolling sum: every window is
//! sliced out of the sequence, copied into a freshly allocated vector, and
//! summed. It exists as the reference point the aliased reducer is measured
//! and verified against.
//!
//! ## Key concepts
//!
//! * **Data movement**: `O(n * window_size)` element copies and one allocation per window.
//! * **Summation**: Identical accumulation order to the strided reducer.
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
use crate::math::sum::sequential_sum;
use crate::primitives::sequence::Sequence;
use crate::primitives::window::Windows;

/// Rolling sum that materializes each window as an owned copy.
pub fn rolling_sum_copied<T: Float>(seq: Sequence<'_, T>, window_size: usize) -> Vec<T> {
    let count = Windows::<T>::count_for(seq.len(), window_size);
    let mut out = Vec::with_capacity(count);

    for start in 0..count {
        let window: Vec<T> = match seq.stride() {
            1 => seq.storage()[start..start + window_size].to_vec(),
            _ => seq.iter().skip(start).take(window_size).collect(),
        };
        out.push(sequential_sum(&window));
    }

    out
}
