//! Common utilities and types used throughout the pipeline simulator.
//!
//! This module provides fundamental building blocks shared across all components:
//! 1. **Constants:** Register count, word size, reset and bubble values.
//! 2. **Error Handling:** Architectural faults and host-level simulator errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

pub use error::{Fault, SimError};
