//! Compilation results.

use crate::bytecode::{AssemblyListing, Program};

/// A finished, fully resolved program.
pub type CompiledProgram = Program;

/// Everything one compilation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub program: CompiledProgram,
    /// Present when the listing was recorded.
    pub listing: Option<AssemblyListing>,
}

/// The output selected by an [`OutputFormat`](crate::OutputFormat).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledOutput {
    Words(CompiledProgram),
    Assembly(AssemblyListing),
}

impl CompiledOutput {
    /// Console text: a hex word list, or the listing one instruction per line.
    pub fn render(&self) -> String {
        match self {
            CompiledOutput::Words(program) => program.to_hex(),
            CompiledOutput::Assembly(listing) => listing.to_string(),
        }
    }

    pub fn words(&self) -> Option<&[u16]> {
        match self {
            CompiledOutput::Words(program) => Some(program.words()),
            CompiledOutput::Assembly(_) => None,
        }
    }

    pub fn listing(&self) -> Option<&AssemblyListing> {
        match self {
            CompiledOutput::Words(_) => None,
            CompiledOutput::Assembly(listing) => Some(listing),
        }
    }
}
