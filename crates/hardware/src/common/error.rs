//! Fault and Simulator Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Architectural Faults:** Illegal instructions and undefined ALU operations,
//!    tagged with the faulting program counter and raw instruction word.
//! 2. **Host Errors:** Program image parsing, I/O, and configuration failures.

use thiserror::Error;

/// Architectural fault raised by the pipeline core.
///
/// A fault is detected in Decode but only takes effect once the faulting
/// instruction reaches Execute; a flush before that point discards it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Unknown opcode, or an unmapped funct3/funct7 combination in either decoder.
    #[error("illegal instruction {inst:#010x} at pc {pc:#010x}")]
    IllegalInstruction {
        /// Program counter of the faulting instruction.
        pc: u32,
        /// Raw 32-bit instruction word.
        inst: u32,
    },

    /// ALU control code outside the 4-bit operation table.
    #[error("undefined ALU operation {code:#x} for {inst:#010x} at pc {pc:#010x}")]
    UndefinedOperation {
        /// Program counter of the faulting instruction.
        pc: u32,
        /// Raw 32-bit instruction word.
        inst: u32,
        /// Offending ALU control code.
        code: u8,
    },
}

impl Fault {
    /// Program counter of the instruction that raised the fault.
    pub const fn pc(&self) -> u32 {
        match self {
            Self::IllegalInstruction { pc, .. } | Self::UndefinedOperation { pc, .. } => *pc,
        }
    }

    /// Raw instruction word that raised the fault.
    pub const fn inst(&self) -> u32 {
        match self {
            Self::IllegalInstruction { inst, .. } | Self::UndefinedOperation { inst, .. } => *inst,
        }
    }

    /// Re-tags the fault with the location of the instruction that raised it.
    ///
    /// Leaf units (decoders, ALU) do not know the PC; the stage that calls
    /// them fills it in.
    #[must_use]
    pub const fn at(self, pc: u32, inst: u32) -> Self {
        match self {
            Self::IllegalInstruction { .. } => Self::IllegalInstruction { pc, inst },
            Self::UndefinedOperation { code, .. } => Self::UndefinedOperation { pc, inst, code },
        }
    }
}

/// Host-level simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// A line of a hex program image could not be parsed.
    #[error("program image line {line}: invalid word '{text}'")]
    ImageParse {
        /// 1-based line number.
        line: usize,
        /// The offending text.
        text: String,
    },

    /// The program image does not fit in instruction memory.
    #[error("program image has {words} words but instruction memory holds {capacity}")]
    ImageTooLarge {
        /// Words in the image.
        words: usize,
        /// Capacity of instruction memory in words.
        capacity: usize,
    },

    /// Reading an image or configuration file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration JSON was malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Simulation halted on an architectural fault.
    #[error("simulation halted: {0}")]
    Fault(#[from] Fault),
}
