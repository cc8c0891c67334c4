//! Literal expression compilation.

use crumble_ast::{LiteralExpr, LiteralKind};
use crumble_core::CompilationError;

use super::{ExprCompiler, Result};

/// Compile a literal. Only integers and booleans fit the controller.
pub fn compile_literal<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    lit: &LiteralExpr<'ast>,
) -> Result<()> {
    match lit.kind {
        LiteralKind::Int(value) => compiler.emitter.push_long(value),
        LiteralKind::Bool(value) => compiler.emitter.push_long(i64::from(value)),
        LiteralKind::Float(_) | LiteralKind::Str(_) | LiteralKind::None => {
            return Err(CompilationError::UnsupportedConstant {
                kind: lit.kind.type_name(),
                span: lit.span,
            });
        }
    }
    Ok(())
}
