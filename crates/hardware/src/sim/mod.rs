//! Simulation utilities and program loading.
//!
//! Provides the program-image loader and the `Simulator` driver that runs a
//! core over word memories.

/// Program image parsing and loading.
pub mod loader;

/// Simulator driver and run control.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator};
