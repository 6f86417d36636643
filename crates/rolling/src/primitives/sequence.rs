//! Read-only strided sequences over borrowed buffers.
//!
//! ## Purpose
//!
//! This module provides [`Sequence`], the one-dimensional input of every
//! rolling reduction. A sequence borrows a contiguous slice and exposes its
//! elements through a known element stride, so that every `stride`-th storage
//! slot is one logical element.
//!
//! ## Design notes
//!
//! * **Non-owning**: A sequence is a `Copy` handle over `&[T]`; it never allocates.
//! * **Immutable**: The borrow is shared, so the buffer cannot change while a
//!   sequence (or any window derived from it) is alive.
//! * **Stride**: Logical element `i` lives at storage index `i * stride`.
//!
//! ## Invariants
//!
//! * `stride >= 1`.
//! * `len() == ceil(data.len() / stride)`.
//!
//! ## Non-goals
//!
//! * This module does not support negative strides or multi-dimensional layouts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::iter::{Copied, StepBy};
use core::slice::Iter;

// Internal dependencies
use crate::primitives::errors::RollingError;

/// A one-dimensional, read-only view of a buffer with a fixed element stride.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sequence<'a, T> {
    data: &'a [T],
    stride: usize,
}

impl<'a, T: Copy> Sequence<'a, T> {
    /// Create a unit-stride sequence over `data`.
    #[inline]
    pub fn new(data: &'a [T]) -> Self {
        Self { data, stride: 1 }
    }

    /// Create a sequence that visits every `stride`-th element of `data`.
    pub fn with_stride(data: &'a [T], stride: usize) -> Result<Self, RollingError> {
        if stride == 0 {
            return Err(RollingError::InvalidStride(stride));
        }
        Ok(Self { data, stride })
    }

    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len().div_ceil(self.stride)
    }

    /// Check if the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Storage units advanced per logical element.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The backing buffer, including slots skipped by the stride.
    #[inline]
    pub fn storage(&self) -> &'a [T] {
        self.data
    }

    /// Logical element `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        index
            .checked_mul(self.stride)
            .and_then(|slot| self.data.get(slot))
            .copied()
    }

    /// Iterate logical elements in order.
    #[inline]
    pub fn iter(&self) -> StepBy<Copied<Iter<'a, T>>> {
        self.data.iter().copied().step_by(self.stride)
    }

    /// Copy the logical elements into a new vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<'a, T: Copy> From<&'a [T]> for Sequence<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::new(data)
    }
}
