//! Layer 3: Algorithms
//!
//! This layer implements the rolling reducers themselves: the copying
//! baseline, the aliased-view reducer, and the running-sum reducer. The
//! engine layer validates inputs and dispatches to them.

// Reduction method selection.
pub mod method;

// Copy-per-window baseline.
pub mod naive;

// Aliased window views over the original buffer.
pub mod strided;

// Incremental running sum.
pub mod running;
