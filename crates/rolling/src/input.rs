//! Input abstractions for rolling reductions.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for reducer inputs, allowing
//! `RollingSum::sum` to accept slices, vectors, fixed-size arrays and (with
//! the `ndarray` feature) `ndarray` arrays through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Contiguous inputs are borrowed directly.
//! * **Strided views**: Non-contiguous one-dimensional arrays (stepped or
//!   reversed slices) are gathered once into logical order. Windows over the
//!   gathered buffer are still aliased views, so the copy is `O(n)` per call.
//! * **Shape checks**: Dynamic-dimension arrays are checked for being one-dimensional.
//!
//! ## Invariants
//!
//! * Returned data holds every logical element of the input, in iteration order.
//! * The gaps of a stepped view are never read.
//!
//! ## Non-goals
//!
//! * This module does not reshape or flatten multi-dimensional inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{borrow::Cow, vec::Vec};
#[cfg(feature = "std")]
use std::{borrow::Cow, vec::Vec};

// External dependencies
#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, Dimension, Ix1, IxDyn};

// Internal dependencies
use crate::primitives::errors::RollingError;
#[cfg(feature = "ndarray")]
use crate::engine::validator::Validator;

/// Trait for types that can be used as input for a rolling reduction.
pub trait RollingInput<T: Clone> {
    /// The input's logical elements as one-dimensional data.
    ///
    /// Borrowed when the container is contiguous, owned when it had to be gathered.
    fn as_rolling_slice(&self) -> Result<Cow<'_, [T]>, RollingError>;
}

impl<T: Clone> RollingInput<T> for [T] {
    fn as_rolling_slice(&self) -> Result<Cow<'_, [T]>, RollingError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: Clone, const N: usize> RollingInput<T> for [T; N] {
    fn as_rolling_slice(&self) -> Result<Cow<'_, [T]>, RollingError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: Clone> RollingInput<T> for Vec<T> {
    fn as_rolling_slice(&self) -> Result<Cow<'_, [T]>, RollingError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

#[cfg(feature = "ndarray")]
impl<T, S> RollingInput<T> for ArrayBase<S, Ix1>
where
    T: Clone,
    S: Data<Elem = T>,
{
    fn as_rolling_slice(&self) -> Result<Cow<'_, [T]>, RollingError> {
        Ok(borrow_or_gather(self))
    }
}

#[cfg(feature = "ndarray")]
impl<T, S> RollingInput<T> for ArrayBase<S, IxDyn>
where
    T: Clone,
    S: Data<Elem = T>,
{
    fn as_rolling_slice(&self) -> Result<Cow<'_, [T]>, RollingError> {
        Validator::validate_ndim(self.ndim())?;
        Ok(borrow_or_gather(self))
    }
}

// Borrow standard-layout arrays; copy any other layout in logical order.
#[cfg(feature = "ndarray")]
fn borrow_or_gather<T, S, D>(array: &ArrayBase<S, D>) -> Cow<'_, [T]>
where
    T: Clone,
    S: Data<Elem = T>,
    D: Dimension,
{
    match array.as_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(array.iter().cloned().collect()),
    }
}
