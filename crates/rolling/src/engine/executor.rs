//! Execution engine for rolling reductions.
//!
//! ## Purpose
//!
//! This module provides the engine that turns a validated configuration and
//! a borrowed buffer into a result sequence. It builds the strided
//! [`Sequence`], validates its shape against the window, and dispatches to the
//! selected reduction method (or to an injected reduce pass).
//!
//! ## Design notes
//!
//! * Provides both configuration-based and parameter-based entry points.
//! * Validation always precedes reduction; there are no partial results.
//! * Emits one `debug` log record per reduction through the `log` facade.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The output length is `len - window_size + 1` for every built-in method.
//! * The input buffer is only read, never copied as a whole.
//!
//! ## Non-goals
//!
//! * This module does not provide public-facing result formatting.
//! * This module does not parallelize the reduction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::method::Method;
use crate::engine::validator::Validator;
use crate::primitives::errors::RollingError;
use crate::primitives::sequence::Sequence;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom reduce pass.
///
/// Receives a validated sequence and window size and must return one value
/// per window start.
pub type ReducePassFn<T> = fn(Sequence<'_, T>, usize) -> Vec<T>;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for a rolling reduction.
#[derive(Debug, Clone, Copy)]
pub struct RollingConfig<T> {
    /// Number of logical elements per window.
    pub window_size: usize,

    /// Storage units per logical element.
    pub stride: usize,

    /// Reduction method.
    pub method: Method,

    /// Replacement for the built-in method, used by tests and extensions.
    #[doc(hidden)]
    pub custom_reduce_pass: Option<ReducePassFn<T>>,
}

impl<T> RollingConfig<T> {
    /// Create a unit-stride configuration using the default method.
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            stride: 1,
            method: Method::default(),
            custom_reduce_pass: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for rolling reductions.
pub struct RollingExecutor;

impl RollingExecutor {
    /// Validate `sequence` against `window_size` and reduce it with `method`.
    pub fn run<T: Float>(
        seq: Sequence<'_, T>,
        window_size: usize,
        method: Method,
    ) -> Result<Vec<T>, RollingError> {
        Validator::validate_inputs(&seq, window_size)?;

        debug!(
            "rolling sum: method={} len={} window={} stride={}",
            method,
            seq.len(),
            window_size,
            seq.stride()
        );

        Ok(method.reduce(seq, window_size))
    }

    /// Run a full configuration over a raw buffer.
    pub fn run_with_config<T: Float>(
        data: &[T],
        config: &RollingConfig<T>,
    ) -> Result<Vec<T>, RollingError> {
        let seq = Sequence::with_stride(data, config.stride)?;

        match config.custom_reduce_pass {
            Some(pass) => {
                Validator::validate_inputs(&seq, config.window_size)?;
                debug!(
                    "rolling sum: custom pass len={} window={} stride={}",
                    seq.len(),
                    config.window_size,
                    seq.stride()
                );
                let values = pass(seq, config.window_size);
                Validator::validate_output_len(values.len(), seq.len(), config.window_size)?;
                Ok(values)
            }
            None => Self::run(seq, config.window_size, config.method),
        }
    }
}
