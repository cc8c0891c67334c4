//! Crumble: compile Crumble programs to controller bytecode.
//!
//! A front-end builds a [`Module`](ast::Module) (for instance with
//! [`AstBuilder`](ast::AstBuilder)); this crate turns it into bytecode
//! words, an assembly listing, or an upload to a device.
//!
//! ```
//! use bumpalo::Bump;
//! use crumble::ast::AstBuilder;
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let module = b.module(&[b.expr_stmt(b.call("wait", &[b.int(10)]))]);
//!
//! let listing = crumble::get_assembly(&module).unwrap();
//! assert_eq!(listing.lines()[0], "PUSHL 10");
//!
//! let mut device: Vec<u16> = Vec::new();
//! crumble::upload(&module, &mut device).unwrap();
//! assert_eq!(device.last(), Some(&0x3FFF));
//! ```

mod error;
mod transport;

pub use crumble_ast as ast;
pub use crumble_compiler as compiler;

pub use crumble_compiler::{
    AssemblyListing, CompilationError, CompiledOutput, CompiledProgram, Compiler, CompilerConfig,
    OutputFormat, compile, disassemble,
};
pub use crumble_core::Span;
pub use error::{Error, Result};
pub use transport::{Transport, TransportError, upload};

use crumble_ast::Module;

/// Compile `module` and return its assembly listing.
pub fn get_assembly(module: &Module<'_>) -> std::result::Result<AssemblyListing, CompilationError> {
    let config = CompilerConfig::new()
        .with_format(OutputFormat::Assembly)
        .build();
    Compiler::new(config)
        .compile_module(module)?
        .listing
        .ok_or_else(|| CompilationError::internal("assembly listing was not recorded"))
}

/// Compile `module` and return its bytecode words.
pub fn get_bytecode(module: &Module<'_>) -> std::result::Result<CompiledProgram, CompilationError> {
    let config = CompilerConfig::new().with_assembly(false).build();
    Ok(Compiler::new(config).compile_module(module)?.program)
}

// Re-export main types
pub mod prelude {
    pub use crate::ast::{AstBuilder, Expr, Module, Stmt};
    pub use crate::compiler::{
        Builtin, CompiledOutput, Compiler, CompilerConfig, OpCode, OutputFormat, Program,
    };
    pub use crate::{CompilationError, Error, Result, Span, Transport, TransportError};
}
