//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Engine:** The synchronous sample-then-commit step over all stages.
//! 2. **Forwarding:** Operand bypass from the Memory and Writeback stages.
//! 3. **Hazards:** Load-use stalls and control-hazard flushes.
//! 4. **Latches:** Inter-stage registers between pipeline stages.
//! 5. **Signals:** Control signals generated during instruction decoding.
//! 6. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.

/// Synchronous pipeline step.
pub mod engine;

/// Operand forwarding unit.
pub mod forwarding;

/// Pipeline hazard detection.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;

pub use engine::{CycleOutputs, PipelineState, step};
