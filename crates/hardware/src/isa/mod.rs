//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and field extraction, organized
//! by extension.
//!
//! # Extensions
//!
//! * `rv32i`: The base integer subset executed by the pipeline (LW, SW, R-type ALU,
//!   I-type ALU, BEQ, JAL).
//! * `xalu`: Custom register-register ALU extension (ten operations on the custom-0 opcode).

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit subset).
pub mod rv32i;

/// Custom ALU extension (ANDN, ORN, XNOR, MIN/MAX, ROL/ROR, ABS).
pub mod xalu;
