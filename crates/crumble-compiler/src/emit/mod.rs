//! Instruction emitter for the Crumble compiler.
//!
//! The [`Emitter`] exposes one method per machine instruction. Every call
//! encodes the instruction into the [`Program`] and, when enabled, mirrors
//! it into the [`AssemblyListing`] as `MNEMONIC [operand]`. Branches log
//! the label name rather than the offset. Operands wider than their field
//! are masked, never rejected.
//!
//! # Example
//!
//! ```
//! use crumble_compiler::emit::Emitter;
//!
//! let mut emitter = Emitter::new(true);
//! let end = emitter.new_label();
//! emitter.push_long(1);
//! emitter.branch_if_zero(end);
//! emitter.push_long(2);
//! emitter.define_label(end);
//! emitter.stop();
//!
//! let (program, listing) = emitter.finish().unwrap();
//! assert_eq!(program.read_wide_operand(2), Some(6));
//! assert_eq!(listing.unwrap().lines()[1], "BEZ label_0");
//! ```

mod labels;
mod loops;

use crate::bytecode::{AssemblyListing, OpCode, Program};

pub use labels::{Fixup, Label, LabelError, LabelTable};
pub use loops::{LoopContext, LoopError, LoopStack};

/// Operand of one emitted instruction, before encoding.
#[derive(Debug, Clone, Copy)]
enum Operand {
    None,
    Byte(i64),
    Long(i64),
    Target(Label),
}

/// Emits Crumble instructions.
pub struct Emitter {
    program: Program,
    listing: Option<AssemblyListing>,
    labels: LabelTable,
    loops: LoopStack,
    current_line: u32,
}

impl Emitter {
    /// Create an emitter, recording the assembly listing when `record_assembly` is set.
    pub fn new(record_assembly: bool) -> Self {
        Self {
            program: Program::new(),
            listing: record_assembly.then(AssemblyListing::new),
            labels: LabelTable::new(),
            loops: LoopStack::new(),
            current_line: 1,
        }
    }

    /// Set current source line for debug info.
    pub fn set_line(&mut self, line: u32) {
        self.current_line = line;
    }

    pub fn current_line(&self) -> u32 {
        self.current_line
    }

    /// Offset of the next emitted word.
    pub fn current_offset(&self) -> usize {
        self.program.current_offset()
    }

    /// The words emitted so far. Forward branches still carry a zero operand.
    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn listing(&self) -> Option<&AssemblyListing> {
        self.listing.as_ref()
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    fn emit(&mut self, op: OpCode, operand: Operand) {
        let line = self.current_line;
        match operand {
            Operand::None => self.program.write_op(op, 0, line),
            Operand::Byte(n) => self.program.write_op(op, (n & 0xFF) as u8, line),
            Operand::Long(n) => self.program.write_wide(op, (n & 0xFFFF) as u16, line),
            Operand::Target(label) => {
                let at = self.program.current_offset();
                let target = match self.labels.offset(label) {
                    Some(offset) => offset as u16,
                    None => {
                        self.labels.record_fixup(at, label);
                        0
                    }
                };
                self.program.write_wide(op, target, line);
            }
        }

        if let Some(listing) = &mut self.listing {
            let text = match operand {
                Operand::None => op.name().to_string(),
                Operand::Byte(n) | Operand::Long(n) => format!("{} {}", op.name(), n),
                Operand::Target(label) => format!("{} {}", op.name(), label),
            };
            listing.push(text);
        }
    }

    // ==========================================================================
    // Labels
    // ==========================================================================

    /// Allocate a new label.
    pub fn new_label(&mut self) -> Label {
        self.labels.create()
    }

    /// Bind `label` to the current offset. Not logged.
    pub fn define_label(&mut self, label: Label) {
        let offset = self.program.current_offset();
        self.labels.define(label, offset);
    }

    /// Append a raw word. Not logged.
    pub fn append_raw(&mut self, word: u16) {
        self.program.write_word(word, self.current_line);
    }

    // ==========================================================================
    // Stack
    // ==========================================================================

    pub fn push(&mut self, slot: i64) {
        self.emit(OpCode::Push, Operand::Byte(slot));
    }

    pub fn push_flag(&mut self, flag: i64) {
        self.emit(OpCode::PushFlag, Operand::Byte(flag));
    }

    /// Push a 16-bit literal. Negative values are stored in two's complement.
    pub fn push_long(&mut self, value: i64) {
        self.emit(OpCode::PushLong, Operand::Long(value));
    }

    pub fn pop(&mut self, slot: i64) {
        self.emit(OpCode::Pop, Operand::Byte(slot));
    }

    pub fn pop_flag(&mut self, flag: i64) {
        self.emit(OpCode::PopFlag, Operand::Byte(flag));
    }

    pub fn pop_discard(&mut self) {
        self.emit(OpCode::PopDiscard, Operand::None);
    }

    pub fn dup(&mut self) {
        self.emit(OpCode::Dup, Operand::None);
    }

    // ==========================================================================
    // Arithmetic and comparison
    // ==========================================================================

    pub fn add(&mut self) {
        self.emit(OpCode::Add, Operand::None);
    }

    pub fn sub(&mut self) {
        self.emit(OpCode::Sub, Operand::None);
    }

    pub fn mul(&mut self) {
        self.emit(OpCode::Mul, Operand::None);
    }

    pub fn div(&mut self) {
        self.emit(OpCode::Div, Operand::None);
    }

    pub fn random(&mut self) {
        self.emit(OpCode::Random, Operand::None);
    }

    pub fn gte(&mut self) {
        self.emit(OpCode::Gte, Operand::None);
    }

    pub fn gt(&mut self) {
        self.emit(OpCode::Gt, Operand::None);
    }

    pub fn lte(&mut self) {
        self.emit(OpCode::Lte, Operand::None);
    }

    pub fn lt(&mut self) {
        self.emit(OpCode::Lt, Operand::None);
    }

    pub fn eq(&mut self) {
        self.emit(OpCode::Eq, Operand::None);
    }

    // ==========================================================================
    // Branches
    // ==========================================================================

    pub fn branch_always(&mut self, label: Label) {
        self.emit(OpCode::Branch, Operand::Target(label));
    }

    pub fn branch_if_zero(&mut self, label: Label) {
        self.emit(OpCode::BranchIfZero, Operand::Target(label));
    }

    pub fn branch_if_nonzero(&mut self, label: Label) {
        self.emit(OpCode::BranchIfNonZero, Operand::Target(label));
    }

    // ==========================================================================
    // Bitwise
    // ==========================================================================

    pub fn and(&mut self) {
        self.emit(OpCode::And, Operand::None);
    }

    pub fn eor(&mut self) {
        self.emit(OpCode::Xor, Operand::None);
    }

    pub fn not(&mut self) {
        self.emit(OpCode::Not, Operand::None);
    }

    pub fn or(&mut self) {
        self.emit(OpCode::Or, Operand::None);
    }

    // ==========================================================================
    // Device I/O
    // ==========================================================================

    pub fn digital_read(&mut self) {
        self.emit(OpCode::DigitalRead, Operand::None);
    }

    pub fn digital_write(&mut self) {
        self.emit(OpCode::DigitalWrite, Operand::None);
    }

    pub fn analog_read(&mut self) {
        self.emit(OpCode::AnalogRead, Operand::None);
    }

    pub fn motor1(&mut self) {
        self.emit(OpCode::Motor1, Operand::None);
    }

    pub fn motor2(&mut self) {
        self.emit(OpCode::Motor2, Operand::None);
    }

    pub fn sparkle_stage(&mut self) {
        self.emit(OpCode::SparkleStage, Operand::None);
    }

    pub fn sparkle_output(&mut self) {
        self.emit(OpCode::SparkleOutput, Operand::None);
    }

    pub fn wait_tick(&mut self) {
        self.emit(OpCode::WaitTick, Operand::None);
    }

    pub fn servo(&mut self) {
        self.emit(OpCode::Servo, Operand::None);
    }

    pub fn ultrasonic_send(&mut self) {
        self.emit(OpCode::UltrasonicSend, Operand::None);
    }

    pub fn ultrasonic_listen(&mut self) {
        self.emit(OpCode::UltrasonicListen, Operand::None);
    }

    /// Emit the halt word `0x3FFF`.
    pub fn stop(&mut self) {
        self.emit(OpCode::Stop, Operand::None);
    }

    // ==========================================================================
    // Loops
    // ==========================================================================

    /// Enter a loop bounded by `start` (continue target) and `end` (break target).
    pub fn enter_loop(&mut self, start: Label, end: Label) {
        self.loops.enter(start, end);
    }

    pub fn exit_loop(&mut self) {
        self.loops.exit();
    }

    /// Branch to the innermost loop's end.
    pub fn emit_break(&mut self) -> Result<(), LoopError> {
        let target = self.loops.break_target()?;
        self.branch_always(target);
        Ok(())
    }

    /// Branch to the innermost loop's start.
    pub fn emit_continue(&mut self) -> Result<(), LoopError> {
        let target = self.loops.continue_target()?;
        self.branch_always(target);
        Ok(())
    }

    pub fn in_loop(&self) -> bool {
        self.loops.in_loop()
    }

    // ==========================================================================
    // Finalization
    // ==========================================================================

    /// Backfill forward branches and return the program and listing.
    pub fn finish(mut self) -> Result<(Program, Option<AssemblyListing>), LabelError> {
        self.labels.resolve(&mut self.program)?;
        Ok((self.program, self.listing))
    }
}
