//! Pipeline stage implementations.
//!
//! Each stage is a pure function from the current latch snapshot to the value
//! its output latch would take next cycle. The engine calls all five against
//! the same snapshot and commits afterwards.
//! 1. **Fetch:** Reads instruction memory at the PC.
//! 2. **Decode:** Decodes control, reads operands, generates the immediate.
//! 3. **Execute:** Forwards operands, runs the ALU and resolves branches.
//! 4. **Memory:** Reads data memory and prepares the store.
//! 5. **Writeback:** Selects the result for the register file.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
