//! Input validation for rolling configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions for rolling reducer
//! parameters and input sequences. Every check runs before any window is
//! reduced, so a failing call never produces a partial result.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: All checks are `O(1)`; element values are never inspected.
//! * **Generics**: Validation is generic over the element type.
//!
//! ## Key concepts
//!
//! * **Shape**: The input must be one-dimensional and non-empty.
//! * **Window bounds**: `1 <= window_size < len`.
//! * **Builder hygiene**: Duplicated or missing parameters are reported at `build()`.
//!
//! ## Invariants
//!
//! * All validated inputs yield at least two windows.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check for NaN or infinite values; they propagate.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::primitives::errors::RollingError;
use crate::primitives::sequence::Sequence;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for rolling configuration and input data.
///
/// Provides static methods for validating rolling parameters and input
/// sequences. All methods return `Result<(), RollingError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a sequence and window size for a rolling reduction.
    pub fn validate_inputs<T: Copy>(
        seq: &Sequence<'_, T>,
        window_size: usize,
    ) -> Result<(), RollingError> {
        // Check 1: Non-empty sequence
        if seq.is_empty() {
            return Err(RollingError::EmptyInput);
        }

        // Check 2: Window bounds
        Self::validate_window_size(window_size, seq.len())
    }

    /// Validate the dimensionality of an array-like input.
    pub fn validate_ndim(ndim: usize) -> Result<(), RollingError> {
        match ndim {
            0 => Err(RollingError::ScalarInput),
            1 => Ok(()),
            _ => Err(RollingError::NotOneDimensional { ndim }),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a window size against the sequence length.
    ///
    /// # Notes
    ///
    /// * The window must be strictly smaller than the sequence, so a window
    ///   equal to the sequence length is rejected.
    pub fn validate_window_size(window_size: usize, len: usize) -> Result<(), RollingError> {
        Self::validate_window_positive(window_size)?;
        if window_size >= len {
            return Err(RollingError::WindowTooLarge { window_size, len });
        }
        Ok(())
    }

    /// Validate that a window holds at least one element.
    pub fn validate_window_positive(window_size: usize) -> Result<(), RollingError> {
        if window_size == 0 {
            return Err(RollingError::InvalidWindowSize(window_size));
        }
        Ok(())
    }

    /// Validate that a reduce pass produced one value per window.
    pub fn validate_output_len(
        produced: usize,
        len: usize,
        window_size: usize,
    ) -> Result<(), RollingError> {
        let expected = (len + 1).saturating_sub(window_size);
        if produced != expected {
            return Err(RollingError::InvalidInput(format!(
                "reduce pass produced {produced} values for {expected} windows"
            )));
        }
        Ok(())
    }

    /// Validate the element stride.
    pub fn validate_stride(stride: usize) -> Result<(), RollingError> {
        if stride == 0 {
            return Err(RollingError::InvalidStride(stride));
        }
        Ok(())
    }

    /// Validate that a required builder parameter was provided.
    pub fn validate_required<V>(
        value: Option<V>,
        parameter: &'static str,
    ) -> Result<V, RollingError> {
        value.ok_or(RollingError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RollingError> {
        if let Some(param) = duplicate_param {
            return Err(RollingError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
