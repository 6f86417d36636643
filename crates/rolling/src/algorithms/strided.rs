//! Aliased-view rolling reducer.
//!
//! ## Purpose
//!
//! This module provides the optimized rolling sum. Instead of copying each
//! window, it walks [`WindowView`]s that alias the sequence's storage: the
//! element stride is used both to step from one window to the next and to
//! step within a window. Each view is reduced in place.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Total data movement is `O(n)` reads of the window
//!   elements; no per-window allocation.
//! * **Safety**: Views are plain offset/length pairs over a shared borrow, so
//!   overlapping windows never require overlapping mutable access.
//! * **Fast path**: Unit-stride views are reduced as plain slices.
//!
//! ## Invariants
//!
//! * Input shape has already been validated by the engine.
//! * Each window is summed left to right from zero, matching the naive baseline bit for bit.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::sum::{accumulate, sequential_sum};
use crate::primitives::sequence::Sequence;
use crate::primitives::window::{WindowView, Windows};

/// Rolling sum over aliased window views.
pub fn rolling_sum_aliased<T: Float>(seq: Sequence<'_, T>, window_size: usize) -> Vec<T> {
    Windows::new(seq, window_size)
        .map(|view| reduce_view(&view))
        .collect()
}

/// Sum one window view without copying it.
#[inline]
pub fn reduce_view<T: Float>(view: &WindowView<'_, T>) -> T {
    match view.as_contiguous() {
        Some(slice) => sequential_sum(slice),
        None => accumulate(view.iter()),
    }
}
