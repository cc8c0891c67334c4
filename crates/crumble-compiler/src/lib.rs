//! Crumble Compiler
//!
//! A single-pass compiler from a Crumble AST to controller bytecode.
//!
//! ## Architecture
//!
//! The statement and expression compilers walk the tree once, driving the
//! [`Emitter`]. Backward branches are encoded as they are emitted; forward
//! branches carry a placeholder that [`Emitter::finish`] backfills once
//! every label is placed. The program always ends with `STOP`.
//!
//! ## Modules
//!
//! - [`bytecode`]: Opcodes, programs, listings and the disassembler
//! - [`emit`]: Instruction emitter with labels and loop contexts
//! - [`expr`]: Expression compiler
//! - [`stmt`]: Statement compiler
//! - [`scope`]: Variable slots and reserved registers
//! - [`builtins`]: The built-in hardware operations
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use crumble_ast::AstBuilder;
//! use crumble_compiler::{OutputFormat, compile};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let module = b.module(&[b.assign(&[b.name("x")], b.int(5))]);
//!
//! let output = compile(&module, OutputFormat::Assembly).unwrap();
//! assert_eq!(output.render(), "PUSHL 0\nPUSHL 5\nPOP 0\nSTOP");
//! ```

pub mod builtins;
pub mod bytecode;
mod config;
pub mod emit;
pub mod expr;
mod output;
pub mod scope;
pub mod stmt;

pub use builtins::Builtin;
pub use bytecode::{AssemblyListing, DecodeError, OpCode, Program, disassemble};
pub use config::{CompilerConfig, OutputFormat, ParseOutputFormatError};
pub use emit::{Emitter, Label, LabelError, LoopError};
pub use expr::ExprCompiler;
pub use output::{Compilation, CompiledOutput, CompiledProgram};
pub use scope::{Register, VariableTable};
pub use stmt::StmtCompiler;

// Re-export CompilationError from core for convenience
pub use crumble_core::CompilationError;

use crumble_ast::Module;
use tracing::debug;

type Result<T> = std::result::Result<T, CompilationError>;

/// The compiler entry point. One value compiles one module.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile `module` into the configured output format.
    pub fn compile(self, module: &Module<'_>) -> Result<CompiledOutput> {
        let format = self.config.format();
        let compilation = self.compile_module(module)?;

        match format {
            OutputFormat::Bytecode | OutputFormat::Device => {
                Ok(CompiledOutput::Words(compilation.program))
            }
            OutputFormat::Assembly => compilation
                .listing
                .map(CompiledOutput::Assembly)
                .ok_or_else(|| CompilationError::internal("assembly listing was not recorded")),
        }
    }

    /// Compile `module`, returning both the program and, when recorded,
    /// the listing.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile_module(self, module: &Module<'_>) -> Result<Compilation> {
        debug!(
            statements = module.body.len(),
            format = %self.config.format(),
            "compiling module"
        );

        let mut vars = VariableTable::new();
        let mut emitter = Emitter::new(self.config.records_assembly());

        StmtCompiler::new(&mut vars, &mut emitter).compile_block(module.body)?;
        emitter.set_line(module.body.last().map_or(module.span.line, |s| s.span().line));
        emitter.stop();

        let labels = emitter.labels().created();
        let fixups = emitter.labels().pending().len();
        let (program, listing) = emitter
            .finish()
            .map_err(|e| CompilationError::internal(e.to_string()))?;

        debug!(
            words = program.len(),
            variables = vars.len(),
            labels,
            fixups,
            "compiled module"
        );

        Ok(Compilation { program, listing })
    }
}

/// Compile `module` with the default configuration and the given format.
pub fn compile(module: &Module<'_>, format: OutputFormat) -> Result<CompiledOutput> {
    Compiler::new(CompilerConfig::new().with_format(format).build()).compile(module)
}
