//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the registers sitting between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Each latch carries the PC, PC+4 and raw word so any
//!    stage can be traced back to its instruction.
//! 2. **Bubbles:** A latch carrying the all-zero word is a bubble, whether it
//!    was flushed or fetched past the end of the program. Flushing resets a
//!    latch to its all-zero value.
//! 3. **Fault Propagation:** Decode faults ride in the ID/EX latch and only take
//!    effect in Execute.

use crate::common::constants::BUBBLE;
use crate::common::error::Fault;
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IfId {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Address of the next sequential instruction.
    pub pc_plus4: u32,
    /// 32-bit instruction word.
    pub inst: u32,
}

/// ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdEx {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Address of the next sequential instruction.
    pub pc_plus4: u32,
    /// 32-bit instruction word.
    pub inst: u32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Sign-extended immediate.
    pub imm: u32,
    /// Value read for rs1.
    pub rv1: u32,
    /// Value read for rs2.
    pub rv2: u32,
    /// Control signals for the downstream stages.
    pub ctrl: ControlSignals,
    /// Fault detected while decoding, raised when the instruction executes.
    pub fault: Option<Fault>,
}

/// EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExMem {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Address of the next sequential instruction.
    pub pc_plus4: u32,
    /// 32-bit instruction word.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU output (also the data memory address).
    pub alu_result: u32,
    /// Forwarded rs2 value to be stored.
    pub write_data: u32,
    /// Control signals for the downstream stages.
    pub ctrl: ControlSignals,
}

impl ExMem {
    /// Value this stage offers to the forwarding network.
    ///
    /// A jump in flight forwards its return address; everything else
    /// forwards the ALU result.
    #[inline]
    pub const fn forward_value(&self) -> u32 {
        if self.ctrl.jump {
            self.pc_plus4
        } else {
            self.alu_result
        }
    }
}

/// MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemWb {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Address of the next sequential instruction.
    pub pc_plus4: u32,
    /// 32-bit instruction word.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU output.
    pub alu_result: u32,
    /// Word read from data memory.
    pub read_data: u32,
    /// Control signals for Writeback.
    pub ctrl: ControlSignals,
}

macro_rules! impl_latch {
    ($($ty:ty),+) => {
        $(
            impl PipelineLatch for $ty {
                fn flush(&mut self) {
                    *self = Self::default();
                }

                fn is_bubble(&self) -> bool {
                    self.inst == BUBBLE
                }
            }
        )+
    };
}

impl_latch!(IfId, IdEx, ExMem, MemWb);

impl IdEx {
    /// Whether this latch raises a fault when it executes.
    #[inline]
    pub const fn has_fault(&self) -> bool {
        self.fault.is_some()
    }
}
