
/// Instruction field extraction.
pub mod instruction;
