//! Decoding words back into instructions.
//!
//! Branch targets decode to numeric word offsets; label names do not
//! survive encoding.

use std::fmt;

use thiserror::Error;

use super::{OpCode, OperandKind};

/// Errors raised while decoding a word stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown opcode {opcode:#04x} at offset {offset}")]
    UnknownOpcode { opcode: u8, offset: usize },

    #[error("truncated {mnemonic} at offset {offset}: missing operand word")]
    Truncated {
        mnemonic: &'static str,
        offset: usize,
    },
}

/// One decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Word offset of the instruction's first word.
    pub offset: usize,
    pub op: OpCode,
    /// Operand for byte, literal and branch forms.
    pub operand: Option<u16>,
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand {
            Some(operand) => write!(f, "{} {}", self.op.name(), operand),
            None => f.write_str(self.op.name()),
        }
    }
}

/// Decode a word stream.
pub fn disassemble(words: &[u16]) -> Result<Vec<DecodedInstruction>, DecodeError> {
    let mut out = Vec::new();
    let mut offset = 0;

    while offset < words.len() {
        let word = words[offset];
        let byte = (word >> 8) as u8;
        let op = OpCode::from_u8(byte).ok_or(DecodeError::UnknownOpcode {
            opcode: byte,
            offset,
        })?;

        let operand = match op.operand_kind() {
            OperandKind::None => None,
            OperandKind::Byte => Some(word & 0x00FF),
            OperandKind::Long | OperandKind::Branch => {
                let high = words.get(offset + 1).ok_or(DecodeError::Truncated {
                    mnemonic: op.name(),
                    offset,
                })?;
                Some(((high & 0x00FF) << 8) | (word & 0x00FF))
            }
        };

        out.push(DecodedInstruction {
            offset,
            op,
            operand,
        });
        offset += op.word_count();
    }

    Ok(out)
}

/// Decode a word stream into listing lines.
pub fn disassemble_to_lines(words: &[u16]) -> Result<Vec<String>, DecodeError> {
    Ok(disassemble(words)?
        .iter()
        .map(ToString::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mixed_widths() {
        let words = [0x0205, 0x0000, 0x0300, 0x1804, 0x0000, 0x3FFF];
        let decoded = disassemble(&words).unwrap();

        assert_eq!(decoded.len(), 4);
        assert_eq!(decoded[0].op, OpCode::PushLong);
        assert_eq!(decoded[0].operand, Some(5));
        assert_eq!(decoded[1].offset, 2);
        assert_eq!(decoded[1].operand, Some(0));
        assert_eq!(decoded[2].op, OpCode::Branch);
        assert_eq!(decoded[2].operand, Some(4));
        assert_eq!(decoded[3].op, OpCode::Stop);
        assert_eq!(decoded[3].operand, None);
    }

    #[test]
    fn renders_numeric_branch_targets() {
        let lines = disassemble_to_lines(&[0x1902, 0x0001, 0x0600]).unwrap();
        assert_eq!(lines, ["BEZ 258", "DUP"]);
    }

    #[test]
    fn unknown_opcode() {
        let err = disassemble(&[0x0800, 0x0700]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownOpcode {
                opcode: 0x07,
                offset: 1
            }
        );
        assert_eq!(err.to_string(), "unknown opcode 0x07 at offset 1");
    }

    #[test]
    fn truncated_wide_instruction() {
        let err = disassemble(&[0x0205]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                mnemonic: "PUSHL",
                offset: 0
            }
        );
    }
}
