//! # rolling — rolling-window aggregation without per-window copies
//!
//! Computes the sum of every contiguous window of a one-dimensional numeric
//! sequence. Windows are non-owning views that alias the input buffer, so the
//! reduction moves `O(n)` data instead of the `O(n * window_size)` a
//! copy-per-window loop would.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use rolling::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let sums = rolling_sum(2, &x)?;
//! assert_eq!(sums, vec![3.0, 5.0, 7.0, 9.0]);
//! # Result::<(), RollingError>::Ok(())
//! ```
//!
//! ### Configured Reducer
//!
//! ```rust
//! use rolling::prelude::*;
//!
//! let x = vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0, 4.0, 40.0];
//!
//! // Build the model
//! let model = Rolling::new()
//!     .window_size(2)     // Two logical elements per window
//!     .stride(2)          // Every other storage slot is one element
//!     .method(Strided)    // Aliased window views (default)
//!     .build()?;
//!
//! let result = model.sum(&x)?;
//! assert_eq!(result.values, vec![3.0, 5.0, 7.0]);
//!
//! println!("{}", result);
//! # Result::<(), RollingError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 4
//!   Window size: 2
//!   Stride:      2
//!   Method:      strided
//!   Windows:     3
//!
//! Rolling Sums:
//!    Start      End            Sum
//! --------------------------------
//!        0        1       3.000000
//!        1        2       5.000000
//!        2        3       7.000000
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<_, RollingError>`. Shape violations are
//! reported before any window is reduced:
//!
//! ```rust
//! use rolling::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! match rolling_sum(5, &x) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => {
//!         assert!(e.is_shape_error());
//!         eprintln!("Rolling failed: {}", e);
//!     }
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! rolling = { version = "0.3", default-features = false }
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support and `std::error::Error`.
//! - `ndarray`: accept `ndarray` arrays as input and return `Array1` results.
//! - `serde`: `Serialize`/`Deserialize` for [`prelude::Method`].
//! - `dev`: expose internal layers for integration tests.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - sequences, window views, errors.
mod primitives;

// Layer 2: Math - summation kernels.
mod math;

// Layer 3: Algorithms - rolling reducers.
mod algorithms;

// Layer 4: Engine - validation and dispatch.
mod engine;

// High-level API.
mod api;

// Input data handling.
mod input;

// Standard rolling prelude.
pub mod prelude {
    pub use crate::api::{
        rolling_sum, rolling_sum_naive, rolling_windows, sequential_sum, strided_sum,
        Method::{self, Naive, Running, Strided},
        RollingBuilder as Rolling, RollingError, RollingResult, RollingSum, Sequence, WindowView,
        Windows,
    };
    pub use crate::input::RollingInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
