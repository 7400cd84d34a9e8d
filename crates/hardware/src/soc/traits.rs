//! Memory service traits.
//!
//! The core talks to its instruction and data memories only through these
//! traits. It presents an address (and, for data writes, the data and enable);
//! the service owns capacity and out-of-range behaviour. Reads are
//! combinational: a read in a cycle returns the contents before that cycle's
//! write commits.

/// Instruction memory port, read once per cycle by Fetch.
pub trait InstructionMemory {
    /// Returns the word at `addr`. Address bits [1:0] are ignored.
    fn read(&self, addr: u32) -> u32;
}

/// Data memory port used by the Memory stage.
pub trait DataMemory {
    /// Returns the word at `addr`. Address bits [1:0] are ignored.
    fn read(&self, addr: u32) -> u32;

    /// Writes `data` to the word at `addr`. Address bits [1:0] are ignored.
    ///
    /// Called at most once per cycle, at commit time, and only when the
    /// Memory-stage write enable is asserted.
    fn write(&mut self, addr: u32, data: u32);
}
