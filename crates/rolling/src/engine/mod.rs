//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a rolling reduction: it validates the input shape,
//! builds the strided sequence, and dispatches to the selected algorithm.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for rolling reductions.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for rolling reductions.
pub mod output;
