//! Leaf functional units.
//!
//! This module contains the combinational datapath units used by the pipeline
//! stages: the ALU and the immediate generator.

/// Arithmetic Logic Unit (16 selectable operations).
pub mod alu;

/// Immediate generator (sign extension for the four immediate formats).
pub mod imm_gen;
