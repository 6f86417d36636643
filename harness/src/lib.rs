//! Entry-point support for profiling the rolling reducer.
//!
//! The binaries in this crate are thin `clap` front ends over these modules:
//!
//! - `profile_rolling`: time the reducer over a pseudo-random sequence and
//!   persist raw statistics to a JSON file.
//! - `complexity_curves`: write `O(n)`, `O(ln(n))` and `O(n^2)` reference
//!   curves as CSV for plotting.

/// Reducer timing and statistics persistence.
pub mod stats;

/// Reference complexity curves.
pub mod curves;
