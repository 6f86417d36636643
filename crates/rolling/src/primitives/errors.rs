//! Error types for rolling-window operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! a rolling reducer or validating its input, most importantly the shape
//! errors raised when a sequence cannot be windowed.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., window size vs. input length).
//! * **Deferred**: Builder misuse is recorded during configuration and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape errors**: Empty or scalar input, multi-dimensional input, a zero
//!    window, or a window that is not strictly smaller than the input.
//! 2. **Parameter errors**: Zero stride, missing or duplicated builder parameters.
//! 3. **Invalid input**: Unknown method names and malformed reduce pass output.
//!
//! ## Invariants
//!
//! * Every shape error is raised before any computation starts.
//! * `is_shape_error()` is true exactly for the shape variants.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for rolling-window operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollingError {
    /// Input sequence has no elements; there is nothing to window.
    EmptyInput,

    /// Input is a zero-dimensional (scalar) array.
    ScalarInput,

    /// Input has more than one dimension.
    NotOneDimensional {
        /// Number of dimensions of the input.
        ndim: usize,
    },

    /// Window size must be a positive integer.
    InvalidWindowSize(usize),

    /// Window size must be strictly smaller than the input length.
    WindowTooLarge {
        /// The window size requested.
        window_size: usize,
        /// Number of elements in the input sequence.
        len: usize,
    },

    /// Element stride must be at least 1.
    InvalidStride(usize),

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl RollingError {
    /// Whether this error reports an input that cannot be windowed.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::ScalarInput
                | Self::NotOneDimensional { .. }
                | Self::InvalidWindowSize(_)
                | Self::WindowTooLarge { .. }
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RollingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Cannot window an empty sequence"),
            Self::ScalarInput => write!(f, "Cannot window a scalar"),
            Self::NotOneDimensional { ndim } => {
                write!(f, "Cannot window input with {ndim} dimensions (expected 1)")
            }
            Self::InvalidWindowSize(size) => {
                write!(f, "Invalid window_size: {size} (must be at least 1)")
            }
            Self::WindowTooLarge { window_size, len } => {
                write!(
                    f,
                    "Cannot window a sequence of length {len} with a window length of {window_size}"
                )
            }
            Self::InvalidStride(stride) => {
                write!(f, "Invalid stride: {stride} (must be at least 1)")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required but was not set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RollingError {}
