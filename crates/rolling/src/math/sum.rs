//! Summation kernels for rolling reductions.
//!
//! ## Purpose
//!
//! This module provides the scalar accumulation routines shared by every
//! reducer. Each routine accumulates left to right from zero, so results are
//! reproducible across methods that visit the same elements in the same order.
//!
//! ## Design notes
//!
//! * **Natural order**: No pairwise or compensated summation; the accumulation
//!   order is the element order.
//! * **IEEE-754**: NaN and infinities propagate through ordinary addition.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Sequential sum**: Every element of a slice.
//! * **Strided sum**: Every `stride`-th element, starting at index 0.
//!
//! ## Non-goals
//!
//! * This module does not detect overflow or non-finite values.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RollingError;

// ============================================================================
// Accumulation
// ============================================================================

/// Sum the values produced by an iterator, left to right from zero.
#[inline]
pub fn accumulate<T: Float, I: IntoIterator<Item = T>>(values: I) -> T {
    values.into_iter().fold(T::zero(), |acc, v| acc + v)
}

/// Sum every element of `data` in order.
#[inline]
pub fn sequential_sum<T: Float>(data: &[T]) -> T {
    let mut sum = T::zero();
    for &v in data {
        sum = sum + v;
    }
    sum
}

/// Sum every `stride`-th element of `data`, starting at index 0.
///
/// # Errors
///
/// Returns [`RollingError::InvalidStride`] when `stride` is zero.
pub fn strided_sum<T: Float>(data: &[T], stride: usize) -> Result<T, RollingError> {
    if stride == 0 {
        return Err(RollingError::InvalidStride(stride));
    }

    let mut sum = T::zero();
    let mut ix = 0;
    while ix < data.len() {
        sum = sum + data[ix];
        ix += stride;
    }
    Ok(sum)
}
