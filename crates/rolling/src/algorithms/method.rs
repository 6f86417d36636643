//! Reduction method selection.
//!
//! ## Purpose
//!
//! This module defines [`Method`], which selects how the rolling reducer
//! walks the input: by copying each window, by aliasing it, or by updating a
//! running total.
//!
//! ## Key concepts
//!
//! * **Naive**: Copy-per-window baseline, `O(n * w)` data movement.
//! * **Strided**: Aliased window views, no per-window copy (default).
//! * **Running**: Incremental add/subtract, `O(n)` arithmetic.
//!
//! ## Invariants
//!
//! * `Naive` and `Strided` produce bit-identical results for the same input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::naive::rolling_sum_copied;
use crate::algorithms::running::rolling_sum_running;
use crate::algorithms::strided::rolling_sum_aliased;
use crate::primitives::errors::RollingError;
use crate::primitives::sequence::Sequence;

// ============================================================================
// Method
// ============================================================================

/// Strategy used to compute per-window sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    /// Copy every window into a fresh vector before summing it.
    Naive,

    /// Sum non-owning views that alias the input buffer.
    #[default]
    Strided,

    /// Maintain a running total across consecutive windows.
    Running,
}

impl Method {
    /// All methods, in declaration order.
    pub const ALL: [Method; 3] = [Method::Naive, Method::Strided, Method::Running];

    /// Lowercase name used in logs, CLIs and benchmark ids.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Strided => "strided",
            Self::Running => "running",
        }
    }

    /// Whether results are bit-identical to a left-to-right sum of each window.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Run this method over an already validated sequence.
    pub fn reduce<T: Float>(&self, seq: Sequence<'_, T>, window_size: usize) -> Vec<T> {
        match self {
            Self::Naive => rolling_sum_copied(seq, window_size),
            Self::Strided => rolling_sum_aliased(seq, window_size),
            Self::Running => rolling_sum_running(seq, window_size),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = RollingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "copy" => Ok(Self::Naive),
            "strided" | "aliased" => Ok(Self::Strided),
            "running" => Ok(Self::Running),
            other => Err(RollingError::InvalidInput(format!(
                "unknown method '{other}' (expected naive, strided or running)"
            ))),
        }
    }
}
