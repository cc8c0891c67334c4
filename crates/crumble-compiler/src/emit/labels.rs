//! Label allocation and forward-branch fix-ups.
//!
//! Branches to a label that is already placed are encoded directly. A
//! branch to a label that is not placed yet gets a zero operand and a
//! fix-up entry, which [`LabelTable::resolve`] backfills once every label
//! is known.

use std::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::trace;

use crate::bytecode::Program;

/// A branch target. Named `label_N` in the assembly listing, where `N`
/// counts labels in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(u32);

impl Label {
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label_{}", self.0)
    }
}

/// A branch operand waiting for its label to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixup {
    /// Offset of the branch instruction's first word.
    pub at: usize,
    pub label: Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("branch to {0} which was never placed")]
    Unresolved(Label),

    #[error("fix-up at offset {0} does not point at a branch")]
    BadPatchSite(usize),
}

#[derive(Debug, Default)]
pub struct LabelTable {
    next: u32,
    offsets: FxHashMap<Label, usize>,
    fixups: Vec<Fixup>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh, unplaced label.
    pub fn create(&mut self) -> Label {
        let label = Label(self.next);
        self.next += 1;
        label
    }

    /// Bind `label` to `offset`.
    pub fn define(&mut self, label: Label, offset: usize) {
        trace!(%label, offset, "label placed");
        self.offsets.insert(label, offset);
    }

    /// Offset `label` is bound to, if placed.
    pub fn offset(&self, label: Label) -> Option<usize> {
        self.offsets.get(&label).copied()
    }

    pub fn record_fixup(&mut self, at: usize, label: Label) {
        self.fixups.push(Fixup { at, label });
    }

    pub fn pending(&self) -> &[Fixup] {
        &self.fixups
    }

    /// Number of labels created so far.
    pub fn created(&self) -> usize {
        self.next as usize
    }

    /// Backfill every recorded fix-up. Returns the number patched.
    pub fn resolve(&mut self, program: &mut Program) -> Result<usize, LabelError> {
        let fixups = std::mem::take(&mut self.fixups);
        for fixup in &fixups {
            let target = self
                .offset(fixup.label)
                .ok_or(LabelError::Unresolved(fixup.label))?;
            // Targets beyond 16 bits wrap, like every other operand.
            if !program.patch_wide(fixup.at, target as u16) {
                return Err(LabelError::BadPatchSite(fixup.at));
            }
            trace!(label = %fixup.label, at = fixup.at, target, "fix-up resolved");
        }
        Ok(fixups.len())
    }
}
