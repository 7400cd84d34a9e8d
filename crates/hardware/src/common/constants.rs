//! Global Core Constants.
//!
//! This module defines architecture-level constants shared across the simulator. It includes:
//! 1. **Register Constants:** Register count and the hardwired-zero index.
//! 2. **Instruction Constants:** Word size and the no-op marker word.
//! 3. **Reset Constants:** Program counter value after reset.

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Index of the hardwired-zero register `x0`.
pub const REG_ZERO: usize = 0;

/// Size of an instruction word in bytes; the sequential PC step.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Raw word loaded into the Fetch→Decode register on reset and flush.
///
/// Decodes to an all-off control bundle (a bubble), never to a fault.
pub const BUBBLE: u32 = 0;

/// Program counter value after reset.
pub const RESET_PC: u32 = 0;

/// Number of low address bits dropped by word-addressed memories.
pub const WORD_ADDR_SHIFT: u32 = 2;
