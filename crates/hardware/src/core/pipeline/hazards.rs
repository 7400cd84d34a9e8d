//! Hazard Detection Unit.
//!
//! This module decides, once per cycle, which pipeline registers hold and
//! which are squashed. It provides:
//! 1. **Load-Use Detection:** A load in Execute whose destination is read by
//!    the instruction in Decode freezes Fetch and Decode for one cycle and
//!    sends a bubble into Execute.
//! 2. **Control Hazards:** A taken branch or any jump resolves in Execute and
//!    squashes the two younger instructions in Fetch and Decode.

use crate::core::pipeline::latches::{IdEx, IfId};
use crate::isa::instruction::InstructionBits;

/// Stall and flush lines driven by the hazard unit for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HazardSignals {
    /// Hold the program counter.
    pub stall_f: bool,
    /// Hold the IF/ID latch.
    pub stall_d: bool,
    /// Replace the IF/ID latch with a bubble.
    pub flush_d: bool,
    /// Replace the ID/EX latch with a bubble.
    pub flush_e: bool,
}

/// Checks for a load-use hazard between Execute and Decode.
///
/// The Decode-stage source fields are taken straight from the instruction
/// bits, whatever the format. A spurious match only costs one cycle.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch (instruction currently in Execute).
/// * `if_id` - The IF/ID latch (instruction currently in Decode).
///
/// # Returns
///
/// `true` if Decode must wait one cycle for the load result.
///
/// # Examples
///
/// ```ignore
/// // ID/EX: lw  x2, 0(x1)     <- loads into x2
/// // IF/ID: add x3, x2, x2    <- uses x2
/// assert!(need_stall_load_use(&id_ex, &if_id));
/// ```
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    if !id_ex.ctrl.is_load() {
        return false;
    }
    let inst = if_id.inst;
    id_ex.rd == inst.rs1() || id_ex.rd == inst.rs2()
}

/// Combines the load-use and control-hazard conditions into stall/flush lines.
///
/// # Arguments
///
/// * `load_use` - Result of [`need_stall_load_use`].
/// * `pc_src` - Whether Execute redirects the PC this cycle.
pub const fn signals(load_use: bool, pc_src: bool) -> HazardSignals {
    HazardSignals {
        stall_f: load_use,
        stall_d: load_use,
        flush_d: pc_src,
        flush_e: load_use || pc_src,
    }
}
