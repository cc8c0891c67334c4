//! Unary prefix operators.

use crumble_ast::{UnaryExpr, UnaryOp};
use crumble_core::CompilationError;

use super::{ExprCompiler, Result};

/// Compile a unary operation.
///
/// The controller has no negate instruction, so `-x` multiplies by -1.
pub fn compile_unary<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    un: &UnaryExpr<'ast>,
) -> Result<()> {
    if un.op == UnaryOp::Invert {
        return Err(CompilationError::UnsupportedOperator {
            op: un.op.as_str(),
            span: un.span,
        });
    }

    compiler.compile(un.operand)?;
    match un.op {
        UnaryOp::Neg => {
            compiler.emitter.push_long(-1);
            compiler.emitter.mul();
        }
        UnaryOp::Not => compiler.emitter.not(),
        UnaryOp::Plus | UnaryOp::Invert => {}
    }
    Ok(())
}
