//! Operand Forwarding Unit.
//!
//! Resolves read-after-write dependencies between the Execute-stage
//! instruction and the two older instructions still in flight. Each source
//! operand is resolved independently:
//! 1. **Memory Stage:** the instruction one ahead; its result was produced last cycle.
//! 2. **Writeback Stage:** the instruction two ahead; its result is being committed now.
//! 3. **Register File:** the value latched at Decode.
//!
//! Register `x0` is never forwarded.

use crate::common::constants::REG_ZERO;
use crate::core::pipeline::latches::{ExMem, IdEx, MemWb};
use crate::core::pipeline::stages::writeback;

/// Source selected for one Execute-stage operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ForwardSel {
    /// Value latched from the register file at Decode (`00`).
    #[default]
    RegFile = 0b00,
    /// Result of the Writeback-stage instruction (`01`).
    Writeback = 0b01,
    /// Result of the Memory-stage instruction (`10`).
    Memory = 0b10,
}

/// Forwarding selections for both Execute-stage operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Forwarding {
    /// Selection for rs1 (ALU source A).
    pub a: ForwardSel,
    /// Selection for rs2 (ALU source B before the immediate mux, and store data).
    pub b: ForwardSel,
}

/// Selects the forwarding source for a single operand index.
///
/// # Arguments
///
/// * `rs` - Source register index of the Execute-stage instruction.
/// * `ex_mem` - The EX/MEM latch (Memory-stage instruction).
/// * `mem_wb` - The MEM/WB latch (Writeback-stage instruction).
pub const fn select(rs: usize, ex_mem: &ExMem, mem_wb: &MemWb) -> ForwardSel {
    if rs == REG_ZERO {
        ForwardSel::RegFile
    } else if ex_mem.ctrl.reg_write && ex_mem.rd == rs {
        ForwardSel::Memory
    } else if mem_wb.ctrl.reg_write && mem_wb.rd == rs {
        ForwardSel::Writeback
    } else {
        ForwardSel::RegFile
    }
}

/// Evaluates the forwarding unit for the instruction in `id_ex`.
pub const fn resolve(id_ex: &IdEx, ex_mem: &ExMem, mem_wb: &MemWb) -> Forwarding {
    Forwarding {
        a: select(id_ex.rs1, ex_mem, mem_wb),
        b: select(id_ex.rs2, ex_mem, mem_wb),
    }
}

/// Applies a forwarding selection to the latched operand value.
///
/// # Arguments
///
/// * `sel` - Selection produced by [`select`].
/// * `latched` - Register-file value carried in ID/EX.
/// * `ex_mem` - The EX/MEM latch.
/// * `mem_wb` - The MEM/WB latch.
///
/// # Returns
///
/// The operand value Execute should use.
pub const fn operand(sel: ForwardSel, latched: u32, ex_mem: &ExMem, mem_wb: &MemWb) -> u32 {
    match sel {
        ForwardSel::RegFile => latched,
        ForwardSel::Memory => ex_mem.forward_value(),
        ForwardSel::Writeback => writeback::result(mem_wb),
    }
}
