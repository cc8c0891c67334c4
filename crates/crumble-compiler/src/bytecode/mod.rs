//! Bytecode types for the Crumble compiler.
//!
//! - [`OpCode`] - The controller's instruction set
//! - [`Program`] - Encoded words plus line information
//! - [`AssemblyListing`] - The readable instruction log
//! - [`disassemble`] - Decoding words back into instructions

mod disasm;
mod listing;
mod opcode;
mod program;

pub use disasm::{DecodeError, DecodedInstruction, disassemble, disassemble_to_lines};
pub use listing::AssemblyListing;
pub use opcode::{OpCode, OperandKind};
pub use program::Program;
