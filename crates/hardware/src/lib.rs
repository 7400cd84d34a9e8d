//! Five-stage pipelined RV32 core simulator library.
//!
//! This crate implements a cycle-accurate model of a classic five-stage integer
//! pipeline with the following:
//! 1. **Core:** Fetch, Decode, Execute, Memory and Writeback advanced in lockstep,
//!    with operand forwarding, load-use stalls and branch flushes.
//! 2. **ISA:** A base RV32 subset (`lw`, `sw`, `add`, `sub`, `and`, `or`, `slt`,
//!    `addi`, `slti`, `ori`, `andi`, `beq`, `jal`) plus a custom ALU extension
//!    (min/max, negated logic, rotates, abs).
//! 3. **Memory:** Finite word-addressed instruction and data memories behind traits.
//! 4. **Simulation:** Loader, configuration, run control and statistics.

/// Common constants and error types.
pub mod common;
/// Simulator configuration (defaults, fault policy, memory sizing).
pub mod config;
/// CPU core (pipeline, control decode, units, register file).
pub mod core;
/// Instruction set (opcodes, field extraction, disassembly).
pub mod isa;
/// Program loader and simulator driver.
pub mod sim;
/// Memory services (traits and word memories).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Pipelined CPU with its memories attached.
pub use crate::core::Cpu;
/// Simulator driver over word memories.
pub use crate::sim::Simulator;
