//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure summation kernels used by the reducers:
//! sequential accumulation over slices and stride-skipping accumulation.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sequential and strided summation.
pub mod sum;
