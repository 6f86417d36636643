//! Output types for rolling reductions.
//!
//! ## Purpose
//!
//! This module defines [`RollingResult`], the caller-owned result of a
//! rolling reduction: one sum per window start plus the parameters that
//! produced it.
//!
//! ## Design notes
//!
//! * **Ownership**: Values are a freshly allocated `Vec<T>` owned by the caller.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `values.len() == input_len - window_size + 1`.
//! * `values[i]` is the sum of logical elements `[i, i + window_size)`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use core::ops::Range;
use core::slice::Iter;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::method::Method;

// ============================================================================
// Result Structure
// ============================================================================

/// Rolling reduction output.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingResult<T> {
    /// One sum per window, in increasing order of start offset.
    pub values: Vec<T>,

    /// Window length used for the reduction.
    pub window_size: usize,

    /// Element stride of the input sequence.
    pub stride: usize,

    /// Number of logical elements in the input sequence.
    pub input_len: usize,

    /// Reduction method that produced the values.
    pub method: Method,
}

impl<T: Float> RollingResult<T> {
    /// Number of windows.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no windows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Logical input range covered by window `index`.
    pub fn window_range(&self, index: usize) -> Option<Range<usize>> {
        (index < self.values.len()).then(|| index..index + self.window_size)
    }

    /// Iterate the per-window sums.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.values.iter()
    }

    /// Consume the result, keeping only the sums.
    #[inline]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Copy the sums into an `ndarray` vector.
    #[cfg(feature = "ndarray")]
    pub fn to_array(&self) -> ndarray::Array1<T> {
        ndarray::Array1::from_vec(self.values.clone())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for RollingResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.input_len)?;
        writeln!(f, "  Window size: {}", self.window_size)?;
        if self.stride != 1 {
            writeln!(f, "  Stride:      {}", self.stride)?;
        }
        writeln!(f, "  Method:      {}", self.method)?;
        writeln!(f, "  Windows:     {}", self.values.len())?;
        writeln!(f)?;

        writeln!(f, "Rolling Sums:")?;
        writeln!(f, "{:>8} {:>8} {:>14}", "Start", "End", "Sum")?;
        writeln!(f, "{:-<width$}", "", width = 32)?;

        // Data rows (show first 10 and last 10 if more than 20 windows)
        let n = self.values.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>8} {:>8} {:>14.6}",
                idx,
                idx + self.window_size - 1,
                self.values[idx]
            )?;
        }

        Ok(())
    }
}
