//! Writeback (WB) Stage.
//!
//! Selects the final result of the oldest instruction and drives the single
//! register-file write port.

use crate::core::pipeline::latches::MemWb;
use crate::core::pipeline::signals::ResultSrc;

/// Register-file write port signals driven by Writeback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WritePort {
    /// Write enable.
    pub enable: bool,
    /// Destination register.
    pub rd: usize,
    /// Value to write.
    pub value: u32,
}

/// Result mux: ALU result, loaded word, or return address.
#[inline]
pub const fn result(mem_wb: &MemWb) -> u32 {
    match mem_wb.ctrl.result_src {
        ResultSrc::Alu => mem_wb.alu_result,
        ResultSrc::Mem => mem_wb.read_data,
        ResultSrc::PcPlus4 => mem_wb.pc_plus4,
    }
}

/// Executes the writeback stage for one cycle.
pub const fn wb_stage(mem_wb: &MemWb) -> WritePort {
    WritePort {
        enable: mem_wb.ctrl.reg_write,
        rd: mem_wb.rd,
        value: result(mem_wb),
    }
}
