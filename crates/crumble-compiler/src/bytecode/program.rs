//! Compiled program storage.
//!
//! A `Program` holds the encoded 16-bit words for a whole module along
//! with the source line each word came from.

use super::{OpCode, OperandKind};

/// A compiled Crumble program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The encoded instruction words.
    words: Vec<u16>,
    /// Line numbers for debugging (parallel to words).
    lines: Vec<u32>,
}

impl Program {
    /// Create a new empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a program with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
            lines: Vec::with_capacity(capacity),
        }
    }

    /// Write a single-word instruction carrying `low` in its low byte.
    pub fn write_op(&mut self, op: OpCode, low: u8, line: u32) {
        self.write_word(op.base_word() | u16::from(low), line);
    }

    /// Write a two-word instruction carrying a 16-bit operand.
    ///
    /// The first word holds the operand's low byte, the second its high byte.
    pub fn write_wide(&mut self, op: OpCode, operand: u16, line: u32) {
        self.write_word(op.base_word() | (operand & 0x00FF), line);
        self.write_word(operand >> 8, line);
    }

    /// Append a raw word.
    pub fn write_word(&mut self, word: u16, line: u32) {
        self.words.push(word);
        self.lines.push(line);
    }

    /// Rewrite the 16-bit operand of the wide instruction starting at `offset`.
    ///
    /// Returns `false` when `offset` does not start a wide instruction.
    pub fn patch_wide(&mut self, offset: usize, operand: u16) -> bool {
        let wide = self
            .read_op(offset)
            .is_some_and(|op| op.word_count() == 2);
        if !wide || offset + 1 >= self.words.len() {
            return false;
        }
        self.words[offset] = (self.words[offset] & 0xFF00) | (operand & 0x00FF);
        self.words[offset + 1] = operand >> 8;
        true
    }

    /// Offset the next word will be written at.
    pub fn current_offset(&self) -> usize {
        self.words.len()
    }

    /// The encoded words.
    pub fn words(&self) -> &[u16] {
        &self.words
    }

    /// Get the line number table.
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    /// Get the line number for a word offset.
    pub fn line_at(&self, offset: usize) -> Option<u32> {
        self.lines.get(offset).copied()
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Read a word at an offset.
    pub fn read_word(&self, offset: usize) -> Option<u16> {
        self.words.get(offset).copied()
    }

    /// Read the 16-bit operand of the wide instruction at `offset`.
    pub fn read_wide_operand(&self, offset: usize) -> Option<u16> {
        let low = self.read_word(offset)? & 0x00FF;
        let high = self.read_word(offset + 1)? & 0x00FF;
        Some((high << 8) | low)
    }

    /// Read the opcode of the word at an offset.
    pub fn read_op(&self, offset: usize) -> Option<OpCode> {
        self.read_word(offset).and_then(OpCode::from_word)
    }

    /// Extract all opcodes, skipping operand words.
    pub fn opcodes(&self) -> Vec<OpCode> {
        let mut ops = Vec::new();
        let mut offset = 0;

        while offset < self.words.len() {
            if let Some(op) = self.read_op(offset) {
                ops.push(op);
                offset += op.word_count();
            } else {
                offset += 1;
            }
        }

        ops
    }

    /// Check that the program is exactly the given opcode sequence.
    ///
    /// Operand values are ignored.
    #[track_caller]
    pub fn assert_opcodes(&self, expected: &[OpCode]) {
        let actual = self.opcodes();
        assert_eq!(
            actual,
            expected,
            "Bytecode mismatch.\nExpected: {:?}\nActual:   {:?}",
            expected.iter().map(|op| op.name()).collect::<Vec<_>>(),
            actual.iter().map(|op| op.name()).collect::<Vec<_>>(),
        );
    }

    /// Check that the program contains the given opcodes in order, not
    /// necessarily contiguous.
    #[track_caller]
    pub fn assert_contains_opcodes(&self, expected: &[OpCode]) {
        let actual = self.opcodes();
        let mut expected_iter = expected.iter().peekable();

        for op in &actual {
            if expected_iter.peek() == Some(&op) {
                expected_iter.next();
            }
        }

        if expected_iter.peek().is_some() {
            let remaining: Vec<_> = expected_iter.map(|op| op.name()).collect();
            panic!(
                "Missing opcodes in sequence.\nExpected to find: {:?}\nActual bytecode:  {:?}",
                remaining,
                actual.iter().map(|op| op.name()).collect::<Vec<_>>(),
            );
        }
    }

    /// Render the words as a bracketed list of lower-case hex literals,
    /// e.g. `[0x200, 0x5, 0x3fff]`.
    pub fn to_hex(&self) -> String {
        let words: Vec<String> = self.words.iter().map(|w| format!("{w:#x}")).collect();
        format!("[{}]", words.join(", "))
    }

    /// Whether the wide instruction at `offset` is a branch.
    pub fn is_branch_at(&self, offset: usize) -> bool {
        self.read_op(offset)
            .is_some_and(|op| op.operand_kind() == OperandKind::Branch)
    }
}
