//! Memory services attached to the core.
//!
//! This module organizes the components outside the pipeline that the core
//! calls into: the instruction/data memory traits and the finite word arrays
//! that implement them.

/// Finite word-addressed memory arrays.
pub mod memory;

/// Memory port traits used by the core.
pub mod traits;

pub use memory::WordMemory;
pub use traits::{DataMemory, InstructionMemory};
