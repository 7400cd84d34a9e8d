//! Memory arrays behind the core's memory ports.

/// Finite word-addressed memory array.
pub mod buffer;

pub use buffer::WordMemory;
