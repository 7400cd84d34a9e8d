//! ALU Sub-Decoder.
//!
//! Maps the main decoder's 2-bit ALU operation class and the instruction's
//! funct fields onto the 4-bit ALU control code.
//!
//! - `Add` (`00`) → add; `Sub` (`01`) → subtract.
//! - `Funct` (`10`): funct3 `000` is subtract when both opcode bit 5 and
//!   funct7 bit 5 are set (R-type SUB; ADDI never subtracts), add otherwise;
//!   `010` slt, `110` or, `111` and.
//! - `Ext` (`11`): dispatch on funct7[6:5], then funct3.

use crate::common::error::Fault;
use crate::core::pipeline::signals::{AluControl, AluOp};
use crate::isa::rv32i::funct3 as i_f3;
use crate::isa::xalu::{funct3 as x_f3, funct7 as x_f7};

/// Fault for an unmapped funct combination; re-tagged by the caller.
const ILLEGAL: Fault = Fault::IllegalInstruction { pc: 0, inst: 0 };

/// Decodes the ALU control code.
///
/// # Arguments
///
/// * `alu_op`    - Operation class from the main decoder.
/// * `op_b5`     - Opcode bit 5.
/// * `funct3`    - Instruction bits [14:12].
/// * `funct7_b5` - Instruction bit 30.
/// * `funct7_hi` - Instruction bits [31:30] (funct7[6:5]).
///
/// # Errors
///
/// Returns [`Fault::IllegalInstruction`] for funct combinations with no operation.
pub const fn decode(
    alu_op: AluOp,
    op_b5: bool,
    funct3: u32,
    funct7_b5: bool,
    funct7_hi: u32,
) -> Result<AluControl, Fault> {
    match alu_op {
        AluOp::Add => Ok(AluControl::Add),
        AluOp::Sub => Ok(AluControl::Sub),
        AluOp::Funct => match funct3 {
            i_f3::ADD_SUB => {
                if op_b5 && funct7_b5 {
                    Ok(AluControl::Sub)
                } else {
                    Ok(AluControl::Add)
                }
            }
            i_f3::SLT => Ok(AluControl::Slt),
            i_f3::OR => Ok(AluControl::Or),
            i_f3::AND => Ok(AluControl::And),
            _ => Err(ILLEGAL),
        },
        AluOp::Ext => match (funct7_hi, funct3) {
            (x_f7::GROUP_MINMAX, x_f3::MIN) => Ok(AluControl::Min),
            (x_f7::GROUP_MINMAX, x_f3::MAX) => Ok(AluControl::Max),
            (x_f7::GROUP_MINMAX, x_f3::MINU) => Ok(AluControl::MinU),
            (x_f7::GROUP_MINMAX, x_f3::MAXU) => Ok(AluControl::MaxU),
            (x_f7::GROUP_LOGIC_N, x_f3::ANDN) => Ok(AluControl::AndN),
            (x_f7::GROUP_LOGIC_N, x_f3::ORN) => Ok(AluControl::OrN),
            (x_f7::GROUP_LOGIC_N, x_f3::XNOR) => Ok(AluControl::Xnor),
            (x_f7::GROUP_ROTATE, x_f3::ROL) => Ok(AluControl::Rol),
            (x_f7::GROUP_ROTATE, x_f3::ROR) => Ok(AluControl::Ror),
            (x_f7::GROUP_ABS, x_f3::ABS) => Ok(AluControl::Abs),
            _ => Err(ILLEGAL),
        },
    }
}
