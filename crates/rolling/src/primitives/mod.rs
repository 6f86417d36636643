//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions used throughout the crate:
//! borrowed strided sequences, non-owning window views, and the shared error
//! type. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Strided read-only sequences.
pub mod sequence;

/// Windowing logic.
pub mod window;

/// Shared error types.
pub mod errors;
