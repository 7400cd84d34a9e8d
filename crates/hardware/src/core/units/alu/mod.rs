//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. It handles
//! the sixteen operations selectable by the 4-bit ALU control code: the base
//! add/sub/and/or/xor/slt set and the ten extension operations.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Slt, Min, Max, MinU, MaxU, Abs
//! - [`logic`]:      And, Or, Xor, AndN, OrN, Xnor
//! - [`rotate`]:     Rol, Ror

/// Adder-based operations and signed/unsigned comparisons.
pub mod arithmetic;

/// Bitwise logical operations.
pub mod logic;

/// Rotate operations.
pub mod rotate;

use crate::common::error::Fault;
use crate::core::pipeline::signals::AluControl;

/// Output of one ALU evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluResult {
    /// 32-bit result.
    pub result: u32,
    /// Set iff `result == 0`; drives the BEQ decision.
    pub zero: bool,
}

/// Arithmetic Logic Unit for 32-bit two's complement operands.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpipe_core::core::units::alu::Alu;
    /// use rvpipe_core::core::pipeline::signals::AluControl;
    ///
    /// let out = Alu::execute(AluControl::Sub, 7, 7);
    /// assert_eq!(out.result, 0);
    /// assert!(out.zero);
    ///
    /// // -5 < 10
    /// assert_eq!(Alu::execute(AluControl::Slt, -5_i32 as u32, 10).result, 1);
    ///
    /// // Rotate by zero leaves the operand unchanged.
    /// assert_eq!(Alu::execute(AluControl::Rol, 0x8000_0001, 0).result, 0x8000_0001);
    /// ```
    pub fn execute(op: AluControl, a: u32, b: u32) -> AluResult {
        let result = match op {
            AluControl::Add
            | AluControl::Sub
            | AluControl::Slt
            | AluControl::Min
            | AluControl::Max
            | AluControl::MinU
            | AluControl::MaxU
            | AluControl::Abs => arithmetic::execute(op, a, b),

            AluControl::And
            | AluControl::Or
            | AluControl::Xor
            | AluControl::AndN
            | AluControl::OrN
            | AluControl::Xnor => logic::execute(op, a, b),

            AluControl::Rol | AluControl::Ror => rotate::execute(op, a, b),
        };
        AluResult {
            result,
            zero: result == 0,
        }
    }

    /// Executes an operation given its raw hardware code.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UndefinedOperation`] (with zero PC/instruction) when
    /// `code` is not a 4-bit operation code.
    pub fn execute_raw(code: u8, a: u32, b: u32) -> Result<AluResult, Fault> {
        let op = AluControl::try_from(code)?;
        Ok(Self::execute(op, a, b))
    }
}
