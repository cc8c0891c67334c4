//! Bytecode operation codes.
//!
//! This module defines the instruction set of the Crumble controller.
//! Every instruction is one or two 16-bit words; the opcode lives in the
//! high byte of the first word.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Bytecode operation codes.
///
/// The controller is a stack machine. Most operations pop operands
/// from the stack and push results back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum OpCode {
    // =========================================================================
    // Stack
    // =========================================================================
    /// Push the value held in a variable slot.
    /// Operand: u8 slot
    Push = 0x00,
    /// Push a flag register.
    /// Operand: u8 flag index
    PushFlag = 0x01,
    /// Push a 16-bit literal.
    /// Operand: low byte inline, high byte in the following word
    PushLong = 0x02,
    /// Pop into a variable slot.
    /// Operand: u8 slot
    Pop = 0x03,
    /// Pop into a flag register.
    /// Operand: u8 flag index
    PopFlag = 0x04,
    /// Pop and discard the top of stack.
    PopDiscard = 0x05,
    /// Duplicate top of stack.
    Dup = 0x06,

    // =========================================================================
    // Arithmetic
    // =========================================================================
    Add = 0x08,
    Sub = 0x09,
    Mul = 0x0A,
    Div = 0x0B,
    /// Pops high then low, pushes a random value in between.
    Random = 0x0C,

    // =========================================================================
    // Comparison (push 1 or 0)
    // =========================================================================
    Gte = 0x10,
    Gt = 0x11,
    Lte = 0x12,
    Lt = 0x13,
    Eq = 0x14,

    // =========================================================================
    // Branches
    // =========================================================================
    /// Jump unconditionally.
    /// Operand: low byte of target inline, high byte in the following word
    Branch = 0x18,
    /// Pop, jump if zero.
    BranchIfZero = 0x19,
    /// Pop, jump if non-zero.
    BranchIfNonZero = 0x1A,

    // =========================================================================
    // Bitwise
    // =========================================================================
    And = 0x20,
    Xor = 0x21,
    Not = 0x22,
    Or = 0x23,

    // =========================================================================
    // Device I/O
    // =========================================================================
    DigitalRead = 0x28,
    DigitalWrite = 0x29,
    AnalogRead = 0x2A,
    Motor1 = 0x30,
    Motor2 = 0x31,
    /// Stage an RGB value for a sparkle.
    SparkleStage = 0x32,
    /// Latch staged sparkle values out to the LEDs.
    SparkleOutput = 0x33,
    /// Busy-wait one device tick.
    WaitTick = 0x34,
    Servo = 0x36,
    UltrasonicSend = 0x37,
    UltrasonicListen = 0x38,

    /// Halt. Encoded as the full word `0x3FFF`.
    Stop = 0x3F,
}

/// Shape of an opcode's operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// Single word, low byte unused.
    None,
    /// Single word, 8-bit operand in the low byte.
    Byte,
    /// Two words carrying a 16-bit literal.
    Long,
    /// Two words carrying a 16-bit branch target.
    Branch,
}

impl OpCode {
    /// Convert from a raw opcode byte.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// Decode the opcode held in the high byte of a word.
    pub fn from_word(word: u16) -> Option<Self> {
        Self::from_u8((word >> 8) as u8)
    }

    /// Operand shape for this opcode.
    pub fn operand_kind(self) -> OperandKind {
        use OpCode::*;
        match self {
            Push | PushFlag | Pop | PopFlag => OperandKind::Byte,
            PushLong => OperandKind::Long,
            Branch | BranchIfZero | BranchIfNonZero => OperandKind::Branch,
            _ => OperandKind::None,
        }
    }

    /// Number of words one instance of this instruction occupies.
    pub fn word_count(self) -> usize {
        match self.operand_kind() {
            OperandKind::None | OperandKind::Byte => 1,
            OperandKind::Long | OperandKind::Branch => 2,
        }
    }

    /// First word of the instruction before any operand is merged in.
    pub fn base_word(self) -> u16 {
        let low = if self == OpCode::Stop { 0xFF } else { 0x00 };
        (u16::from(u8::from(self)) << 8) | low
    }

    /// Assembly mnemonic.
    pub fn name(self) -> &'static str {
        use OpCode::*;
        match self {
            Push => "PUSH",
            PushFlag => "PUSHF",
            PushLong => "PUSHL",
            Pop => "POP",
            PopFlag => "POPF",
            PopDiscard => "POPRM",
            Dup => "DUP",
            Add => "ADD",
            Sub => "SUB",
            Mul => "MUL",
            Div => "DIV",
            Random => "RND",
            Gte => "GTE",
            Gt => "GT",
            Lte => "LTE",
            Lt => "LT",
            Eq => "EQ",
            Branch => "BRA",
            BranchIfZero => "BEZ",
            BranchIfNonZero => "BNZ",
            And => "AND",
            Xor => "EOR",
            Not => "NOT",
            Or => "OR",
            DigitalRead => "DRD",
            DigitalWrite => "DWR",
            AnalogRead => "ARD",
            Motor1 => "MOT1",
            Motor2 => "MOT2",
            SparkleStage => "SSPRK",
            SparkleOutput => "OSPRK",
            WaitTick => "WAIT",
            Servo => "SRV",
            UltrasonicSend => "USONS",
            UltrasonicListen => "USONL",
            Stop => "STOP",
        }
    }
}
