//! Pipeline latch interface.

/// Represents a pipeline latch (inter-stage register).
///
/// Latches hold the state of one instruction between two stages. Flushing a
/// latch turns its contents into a bubble.
pub trait PipelineLatch {
    /// Resets the latch to the bubble value.
    ///
    /// The engine flushes IF/ID on a taken branch or jump, and ID/EX on a taken
    /// branch, jump or load-use stall. The `Nop` fault policy also flushes ID/EX.
    fn flush(&mut self);

    /// Checks whether the latch carries the all-zero bubble word.
    fn is_bubble(&self) -> bool;
}
