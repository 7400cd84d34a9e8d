//! Pipeline control signals.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **ALU Selection:** The 2-bit `ALUOp` class from the main decoder and the 4-bit
//!    ALU control code produced by the ALU sub-decoder.
//! 2. **Operand Selection:** Immediate format and ALU source B selection.
//! 3. **Result Selection:** Which value the Writeback stage commits.
//! 4. **Control Bundle:** The per-instruction signals carried alongside the data
//!    through every pipeline register.

use crate::common::error::Fault;

/// 4-bit ALU operation code.
///
/// The discriminants are the hardware encodings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AluControl {
    /// Addition (default; also the bubble's operation).
    #[default]
    Add = 0b0000,
    /// Subtraction.
    Sub = 0b0001,
    /// Bitwise AND.
    And = 0b0010,
    /// Bitwise OR.
    Or = 0b0011,
    /// Bitwise XOR.
    Xor = 0b0100,
    /// Signed set-less-than through the subtract path.
    Slt = 0b0101,
    /// `a & !b`.
    AndN = 0b0110,
    /// `a | !b`.
    OrN = 0b0111,
    /// `!(a ^ b)`.
    Xnor = 0b1000,
    /// Signed minimum.
    Min = 0b1001,
    /// Signed maximum.
    Max = 0b1010,
    /// Unsigned minimum.
    MinU = 0b1011,
    /// Unsigned maximum.
    MaxU = 0b1100,
    /// Rotate left by `b mod 32`.
    Rol = 0b1101,
    /// Rotate right by `b mod 32`.
    Ror = 0b1110,
    /// Signed absolute value of `a`.
    Abs = 0b1111,
}

impl AluControl {
    /// All sixteen operations in encoding order.
    pub const ALL: [Self; 16] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Slt,
        Self::AndN,
        Self::OrN,
        Self::Xnor,
        Self::Min,
        Self::Max,
        Self::MinU,
        Self::MaxU,
        Self::Rol,
        Self::Ror,
        Self::Abs,
    ];

    /// Hardware encoding of the operation.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes a hardware encoding; `None` for codes wider than 4 bits.
    #[inline]
    pub const fn from_bits(code: u8) -> Option<Self> {
        if code < 16 {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }
}

impl TryFrom<u8> for AluControl {
    type Error = Fault;

    /// The resulting fault carries a zero PC/instruction; callers re-tag it with [`Fault::at`].
    fn try_from(code: u8) -> Result<Self, Fault> {
        Self::from_bits(code).ok_or(Fault::UndefinedOperation {
            pc: 0,
            inst: 0,
            code,
        })
    }
}

/// 2-bit ALU operation class produced by the main decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AluOp {
    /// Address calculation (`00`): always add.
    #[default]
    Add = 0b00,
    /// Branch comparison (`01`): always subtract.
    Sub = 0b01,
    /// Base R/I-type arithmetic (`10`): decoded from funct3/funct7.
    Funct = 0b10,
    /// Custom extension (`11`): decoded from funct7[6:5] then funct3.
    Ext = 0b11,
}

/// Immediate format selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ImmSrc {
    /// I-type (`00`): loads and immediate arithmetic.
    #[default]
    I = 0b00,
    /// S-type (`01`): stores.
    S = 0b01,
    /// B-type (`10`): branches.
    B = 0b10,
    /// J-type (`11`): jumps.
    J = 0b11,
}

impl ImmSrc {
    /// Decodes a selector; `None` for values wider than 2 bits.
    #[inline]
    pub const fn from_bits(sel: u8) -> Option<Self> {
        match sel {
            0b00 => Some(Self::I),
            0b01 => Some(Self::S),
            0b10 => Some(Self::B),
            0b11 => Some(Self::J),
            _ => None,
        }
    }
}

/// Writeback result selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ResultSrc {
    /// ALU result (`00`).
    #[default]
    Alu = 0b00,
    /// Data memory read (`01`).
    Mem = 0b01,
    /// Return address PC+4 (`10`).
    PcPlus4 = 0b10,
}

/// Control signals carried alongside an instruction through the pipeline.
///
/// The default value has every signal off, which makes the carrying
/// instruction a bubble: no register write, no memory write, no redirect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Enable write to the destination register in Writeback.
    pub reg_write: bool,
    /// Enable data memory write in Memory.
    pub mem_write: bool,
    /// ALU source B: immediate when set, rs2 otherwise.
    pub alu_src: bool,
    /// Writeback result selection.
    pub result_src: ResultSrc,
    /// Instruction is a conditional branch (BEQ).
    pub branch: bool,
    /// Instruction is an unconditional jump (JAL).
    pub jump: bool,
    /// ALU operation for the Execute stage.
    pub alu_control: AluControl,
    /// Immediate format used in Decode.
    pub imm_src: ImmSrc,
}

impl ControlSignals {
    /// The all-off bundle.
    pub const BUBBLE: Self = Self {
        reg_write: false,
        mem_write: false,
        alu_src: false,
        result_src: ResultSrc::Alu,
        branch: false,
        jump: false,
        alu_control: AluControl::Add,
        imm_src: ImmSrc::I,
    };

    /// Whether the instruction reads data memory (a load).
    #[inline]
    pub const fn is_load(&self) -> bool {
        matches!(self.result_src, ResultSrc::Mem)
    }

    /// Whether the bundle has any architectural side effect.
    #[inline]
    pub const fn is_bubble(&self) -> bool {
        !(self.reg_write || self.mem_write || self.branch || self.jump)
    }
}
