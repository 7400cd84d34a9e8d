//! General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero on both
//!    read and write ports.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.
//!
//! The file has two combinational read ports and one write port. Writes are
//! committed by the CPU after every stage has sampled its inputs, so a read
//! never observes a write from the same cycle (write-after-read).

use crate::common::constants::{NUM_REGS, REG_ZERO};

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register through either read port.
    ///
    /// Register `x0` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid register index (0-31).
    pub fn read(&self, idx: usize) -> u32 {
        assert!(idx < NUM_REGS, "register index {idx} out of range");
        if idx == REG_ZERO { 0 } else { self.regs[idx] }
    }

    /// Writes a register through the single write port.
    ///
    /// The write only commits when `enable` is set and `idx` is not `x0`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid register index (0-31).
    pub fn write_port(&mut self, enable: bool, idx: usize, val: u32) {
        assert!(idx < NUM_REGS, "register index {idx} out of range");
        if enable && idx != REG_ZERO {
            self.regs[idx] = val;
        }
    }

    /// Writes a register unconditionally (writes to `x0` are ignored).
    pub fn write(&mut self, idx: usize, val: u32) {
        self.write_port(true, idx, val);
    }

    /// Returns a copy of all 32 register values, `x0` included.
    pub const fn snapshot(&self) -> [u32; NUM_REGS] {
        self.regs
    }

    /// Dumps the contents of all registers to stdout, four per line.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(4) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                i + 2,
                self.regs[i + 2],
                i + 3,
                self.regs[i + 3]
            );
        }
    }
}
