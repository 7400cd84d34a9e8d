//! Memory Access (MEM) Stage.
//!
//! Presents the ALU result as the data address. Data memory is read only for
//! loads; every other instruction carries zero as its read data. The write
//! request is returned to the caller and applied at commit, after every stage
//! has sampled this cycle's state.

use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::soc::traits::DataMemory;

/// Data-memory port signals driven by the Memory stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemRequest {
    /// Word address (the ALU result).
    pub addr: u32,
    /// Data to store.
    pub write_data: u32,
    /// Store enable.
    pub write_enable: bool,
}

/// Executes the memory stage for one cycle.
///
/// # Arguments
///
/// * `ex_mem` - The EX/MEM latch.
/// * `dmem` - Data memory port.
///
/// # Returns
///
/// The MEM/WB latch contents for next cycle, and the port request to commit.
pub fn mem_stage<D: DataMemory + ?Sized>(ex_mem: &ExMem, dmem: &D) -> (MemWb, MemRequest) {
    let read_data = if ex_mem.ctrl.is_load() {
        dmem.read(ex_mem.alu_result)
    } else {
        0
    };

    let latch = MemWb {
        pc: ex_mem.pc,
        pc_plus4: ex_mem.pc_plus4,
        inst: ex_mem.inst,
        rd: ex_mem.rd,
        alu_result: ex_mem.alu_result,
        read_data,
        ctrl: ex_mem.ctrl,
    };
    let request = MemRequest {
        addr: ex_mem.alu_result,
        write_data: ex_mem.write_data,
        write_enable: ex_mem.ctrl.mem_write,
    };
    (latch, request)
}
