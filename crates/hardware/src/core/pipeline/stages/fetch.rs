//! Instruction Fetch (IF) Stage.
//!
//! Reads one word from instruction memory at the current PC. Fetch never
//! faults: whatever word comes back (including the all-zero word past the end
//! of the program) is handed to Decode.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::pipeline::latches::IfId;
use crate::soc::traits::InstructionMemory;

/// Executes the fetch stage for one cycle.
///
/// # Arguments
///
/// * `pc` - Current program counter.
/// * `imem` - Instruction memory port.
///
/// # Returns
///
/// The IF/ID latch contents Decode would see next cycle.
pub fn fetch_stage<I: InstructionMemory + ?Sized>(pc: u32, imem: &I) -> IfId {
    IfId {
        pc,
        pc_plus4: pc.wrapping_add(INSTRUCTION_SIZE),
        inst: imem.read(pc),
    }
}
