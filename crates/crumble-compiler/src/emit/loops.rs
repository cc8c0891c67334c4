//! Loop context tracking for break/continue.

use thiserror::Error;

use super::Label;

/// Raised when `break` or `continue` has no enclosing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoopError {
    #[error("break statement not inside a loop")]
    BreakOutsideLoop,
    #[error("continue statement not inside a loop")]
    ContinueOutsideLoop,
}

/// Labels bounding one loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopContext {
    /// Target of `continue`.
    pub start: Label,
    /// Target of `break`.
    pub end: Label,
}

/// Stack of enclosing loops (innermost last).
#[derive(Debug, Default)]
pub struct LoopStack {
    loops: Vec<LoopContext>,
}

impl LoopStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, start: Label, end: Label) {
        self.loops.push(LoopContext { start, end });
    }

    pub fn exit(&mut self) -> Option<LoopContext> {
        self.loops.pop()
    }

    pub fn in_loop(&self) -> bool {
        !self.loops.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.loops.len()
    }

    pub fn break_target(&self) -> Result<Label, LoopError> {
        self.loops
            .last()
            .map(|ctx| ctx.end)
            .ok_or(LoopError::BreakOutsideLoop)
    }

    pub fn continue_target(&self) -> Result<Label, LoopError> {
        self.loops
            .last()
            .map(|ctx| ctx.start)
            .ok_or(LoopError::ContinueOutsideLoop)
    }
}
