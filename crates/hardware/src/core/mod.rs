//! Core processor implementation.
//!
//! This module contains the pipelined CPU: the architectural register file,
//! the leaf functional units, layered control decode, the five-stage pipeline
//! and the top-level wiring that commits each cycle.

/// Architectural state (general-purpose register file).
pub mod arch;

/// Main decoder and ALU sub-decoder.
pub mod control;

/// CPU core implementation and per-cycle commit.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, forwarding, hazards, signals).
pub mod pipeline;

/// Functional units (ALU, immediate generator).
pub mod units;

pub use self::cpu::Cpu;
