//! High-level API for rolling reductions.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the
//! [`rolling_sum`] family of free functions, and a fluent builder for
//! configuring a reusable [`RollingSum`] model.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (strided method, unit stride).
//! * **Validated**: Parameters are validated when `.build()` is called; input
//!   shape is validated on every call to `.sum()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RollingBuilder`] via `Rolling::new()`.
//! 2. Chain configuration methods (`.window_size()`, `.method()`, `.stride()`).
//! 3. Call `.build()` to obtain a [`RollingSum`], then `.sum(&data)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ReducePassFn, RollingConfig, RollingExecutor};
use crate::engine::validator::Validator;
use crate::input::RollingInput;

// Publicly re-exported types
pub use crate::algorithms::method::Method;
pub use crate::engine::output::RollingResult;
pub use crate::math::sum::{sequential_sum, strided_sum};
pub use crate::primitives::errors::RollingError;
pub use crate::primitives::sequence::Sequence;
pub use crate::primitives::window::{WindowView, Windows};

// ============================================================================
// Free Functions
// ============================================================================

/// Sum every contiguous window of `window_size` elements without copying windows.
///
/// # Errors
///
/// Returns a shape error when `data` is empty, `window_size` is zero, or
/// `window_size >= data.len()`.
pub fn rolling_sum<T: Float>(window_size: usize, data: &[T]) -> Result<Vec<T>, RollingError> {
    RollingExecutor::run(Sequence::new(data), window_size, Method::Strided)
}

/// Sum every contiguous window by first copying it into a fresh vector.
///
/// Same contract as [`rolling_sum`]; kept as the performance baseline.
pub fn rolling_sum_naive<T: Float>(
    window_size: usize,
    data: &[T],
) -> Result<Vec<T>, RollingError> {
    RollingExecutor::run(Sequence::new(data), window_size, Method::Naive)
}

/// Validated iterator over the aliased windows of `data`.
pub fn rolling_windows<T: Copy>(
    window_size: usize,
    data: &[T],
) -> Result<Windows<'_, T>, RollingError> {
    let seq = Sequence::new(data);
    Validator::validate_inputs(&seq, window_size)?;
    Ok(Windows::new(seq, window_size))
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a rolling reducer.
#[derive(Debug, Clone)]
pub struct RollingBuilder<T> {
    /// Window length (required).
    pub window_size: Option<usize>,

    /// Reduction method (default: Strided).
    pub method: Option<Method>,

    /// Element stride of the input buffer (default: 1).
    pub stride: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom reduce pass function.
    #[doc(hidden)]
    pub custom_reduce_pass: Option<ReducePassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RollingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RollingBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window_size: None,
            method: None,
            stride: None,
            custom_reduce_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the window length.
    pub fn window_size(mut self, window_size: usize) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(window_size);
        self
    }

    /// Set the reduction method.
    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Treat every `stride`-th element of the input as one logical element.
    pub fn stride(mut self, stride: usize) -> Self {
        if self.stride.is_some() {
            self.duplicate_param = Some("stride");
        }
        self.stride = Some(stride);
        self
    }

    /// Replace the built-in method with a custom reduce pass.
    #[doc(hidden)]
    pub fn custom_reduce_pass(mut self, pass: ReducePassFn<T>) -> Self {
        self.custom_reduce_pass = Some(pass);
        self
    }

    /// Validate the configuration and build a reusable reducer.
    pub fn build(self) -> Result<RollingSum<T>, RollingError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let window_size = Validator::validate_required(self.window_size, "window_size")?;
        Validator::validate_window_positive(window_size)?;

        let stride = self.stride.unwrap_or(1);
        Validator::validate_stride(stride)?;

        Ok(RollingSum {
            config: RollingConfig {
                window_size,
                stride,
                method: self.method.unwrap_or_default(),
                custom_reduce_pass: self.custom_reduce_pass,
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured rolling-sum reducer.
#[derive(Debug, Clone, Copy)]
pub struct RollingSum<T> {
    config: RollingConfig<T>,
}

impl<T: Float> RollingSum<T> {
    /// Window length.
    pub fn window_size(&self) -> usize {
        self.config.window_size
    }

    /// Reduction method.
    pub fn method(&self) -> Method {
        self.config.method
    }

    /// Element stride.
    pub fn stride(&self) -> usize {
        self.config.stride
    }

    /// Resolved configuration.
    pub fn config(&self) -> &RollingConfig<T> {
        &self.config
    }

    /// Compute every window's sum over `input`.
    pub fn sum<I>(&self, input: &I) -> Result<RollingResult<T>, RollingError>
    where
        I: RollingInput<T> + ?Sized,
    {
        let data = input.as_rolling_slice()?;
        let values = RollingExecutor::run_with_config(&data, &self.config)?;

        Ok(RollingResult {
            values,
            window_size: self.config.window_size,
            stride: self.config.stride,
            input_len: data.len().div_ceil(self.config.stride),
            method: self.config.method,
        })
    }
}
