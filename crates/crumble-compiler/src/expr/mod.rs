//! Expression compiler for Crumble.
//!
//! The [`ExprCompiler`] lowers AST expressions to stack code. Every
//! supported expression leaves exactly one value on the stack:
//! - Literals push their value with `PUSHL`
//! - Names push a variable slot or a register index
//! - Operators compile their operands left to right, then apply the opcode
//! - Calls lower one of the built-in hardware operations
//!
//! # Example
//!
//! ```ignore
//! let mut compiler = ExprCompiler::new(&vars, &mut emitter);
//! compiler.compile(&expr)?;
//! ```

mod binary;
mod calls;
mod identifiers;
mod literals;
mod unary;

use crumble_ast::Expr;
use crumble_core::CompilationError;

use crate::emit::Emitter;
use crate::scope::VariableTable;

type Result<T> = std::result::Result<T, CompilationError>;

/// Compiles expressions to stack code.
///
/// Expressions never declare variables, so the variable table is borrowed
/// shared.
pub struct ExprCompiler<'a, 'ast> {
    vars: &'a VariableTable<'ast>,
    emitter: &'a mut Emitter,
}

impl<'a, 'ast> ExprCompiler<'a, 'ast> {
    pub fn new(vars: &'a VariableTable<'ast>, emitter: &'a mut Emitter) -> Self {
        Self { vars, emitter }
    }

    /// Compile `expr`, leaving its value on the stack.
    pub fn compile(&mut self, expr: &Expr<'ast>) -> Result<()> {
        match expr {
            Expr::Literal(lit) => literals::compile_literal(self, lit),
            Expr::Name(name) => identifiers::compile_name(self, name),
            Expr::Binary(bin) => binary::compile_binary(self, bin),
            Expr::BoolOp(bool_op) => binary::compile_bool_op(self, bool_op),
            Expr::Compare(cmp) => binary::compile_compare(self, cmp),
            Expr::Unary(un) => unary::compile_unary(self, un),
            Expr::Call(call) => calls::compile_call(self, call),
            Expr::Attribute(_) | Expr::Subscript(_) => {
                Err(CompilationError::UnsupportedExpression {
                    kind: expr.kind_name(),
                    span: expr.span(),
                })
            }
        }
    }
}
