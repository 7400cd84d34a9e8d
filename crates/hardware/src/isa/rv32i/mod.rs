//! RISC-V Base Integer Instruction Set (I), 32-bit subset.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes recognised by the main decoder.
//! - `funct3`: Minor opcodes distinguishing ALU operations.
//! - `funct7`: Alternate-encoding bit for R-type SUB.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
